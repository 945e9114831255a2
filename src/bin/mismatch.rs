use anyhow::Result;
use parallel_algorithms::report::{self, position_line};
use parallel_algorithms::{mismatch, mismatch_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let x = vec![0i32; 10];
    let mut y = vec![0i32; 10];
    y[7] = 1;

    let at = mismatch(ExecutionPolicy::Sequential, &x, &y);
    println!("{}", position_line("mismatch", at, x.len()));

    let at = mismatch_by(ExecutionPolicy::ParallelUnordered, &x, &y, |a: &i32, b: &i32| a / 2 == b / 2);
    println!("{}", position_line("mismatch with predicate", at, x.len()));

    Ok(())
}
