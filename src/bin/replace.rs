use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{replace, replace_if, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![1i32; 10];
    vec[5] = 7;

    replace(ExecutionPolicy::Sequential, &mut vec, &7, &13);
    println!("{}", sequence_line("replace result", &vec));

    replace_if(ExecutionPolicy::ParallelUnordered, &mut vec, |x: &i32| *x == 13, &7);
    println!("{}", sequence_line("replace_if result", &vec));

    Ok(())
}
