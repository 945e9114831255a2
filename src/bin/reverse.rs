use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{iota, reverse, reverse_copy, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![0i32; 10];
    let mut copy = vec![0i32; 10];
    iota(&mut vec, 0);

    reverse(ExecutionPolicy::Sequential, &mut vec);
    println!("{}", sequence_line("reverse result", &vec));

    reverse_copy(ExecutionPolicy::ParallelUnordered, &vec, &mut copy);
    println!("{}", sequence_line("reverse_copy result", &copy));

    Ok(())
}
