use anyhow::Result;
use parallel_algorithms::report::{self, scalar_line};
use parallel_algorithms::{all_of, any_of, none_of, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let vec = vec![0i32; 10];
    let is_zero = |x: &i32| *x == 0;

    println!("{}", scalar_line("all_of", all_of(ExecutionPolicy::Sequential, &vec, is_zero)));
    println!("{}", scalar_line("any_of", any_of(ExecutionPolicy::ParallelUnordered, &vec, is_zero)));
    println!("{}", scalar_line("none_of", none_of(ExecutionPolicy::Default, &vec, is_zero)));

    Ok(())
}
