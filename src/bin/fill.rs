use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{fill, fill_n, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut x = vec![0i32; 10];
    let mut y = vec![0i32; 10];

    fill(ExecutionPolicy::Sequential, &mut x, &7);
    println!("{}", sequence_line("fill result", &x));

    let n = y.len();
    fill_n(ExecutionPolicy::ParallelUnordered, &mut y, n, &13);
    println!("{}", sequence_line("fill_n result", &y));

    Ok(())
}
