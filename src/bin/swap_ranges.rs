use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{iota, swap_ranges, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut x = vec![0i32; 10];
    let mut y = vec![0i32; 10];
    iota(&mut x, 0);
    iota(&mut y, 10);

    swap_ranges(ExecutionPolicy::Sequential, &mut x, &mut y);

    println!("swap_ranges result:");
    println!("{}", sequence_line("x", &x));
    println!("{}", sequence_line("y", &y));
    println!();

    swap_ranges(ExecutionPolicy::ParallelUnordered, &mut x, &mut y);

    println!("{}", sequence_line("x", &x));
    println!("{}", sequence_line("y", &y));

    Ok(())
}
