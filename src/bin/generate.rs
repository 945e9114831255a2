use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{generate, generate_n, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut x = vec![0i32; 10];
    let mut y = vec![0i32; 10];

    generate(ExecutionPolicy::Sequential, &mut x, || 7);
    println!("{}", sequence_line("generate result", &x));

    let n = y.len();
    generate_n(ExecutionPolicy::ParallelUnordered, &mut y, n, || 13);
    println!("{}", sequence_line("generate_n result", &y));

    Ok(())
}
