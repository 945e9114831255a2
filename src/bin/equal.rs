use anyhow::Result;
use parallel_algorithms::report::{self, scalar_line};
use parallel_algorithms::{equal, equal_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let x = vec![0i32; 10];
    let mut y = vec![0i32; 10];
    y[7] = 1;

    println!("{}", scalar_line("equal", equal(ExecutionPolicy::Sequential, &x, &y)));

    let same = equal_by(ExecutionPolicy::ParallelUnordered, &x, &y, |a: &i32, b: &i32| a / 2 == b / 2);
    println!("{}", scalar_line("equal with predicate", same));

    Ok(())
}
