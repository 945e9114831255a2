use anyhow::Result;
use parallel_algorithms::report::{self, scalar_line};
use parallel_algorithms::{count, count_if, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![0i32; 10];
    vec[0] = 1;
    vec[1] = 1;
    vec[2] = 1;
    vec[3] = 1;

    println!("{}", scalar_line("count", count(ExecutionPolicy::Sequential, &vec, &1)));

    let zeros = count_if(ExecutionPolicy::ParallelUnordered, &vec, |x: &i32| *x == 0);
    println!("{}", scalar_line("count_if", zeros));

    Ok(())
}
