use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{copy, copy_n, iota, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut src = vec![0i32; 10];
    let mut dst = vec![0i32; 10];
    iota(&mut src, 0);

    copy(ExecutionPolicy::Sequential, &src, &mut dst);
    println!("{}", sequence_line("copy result", &dst));

    copy_n(ExecutionPolicy::ParallelUnordered, &src, src.len(), &mut dst);
    println!("{}", sequence_line("copy_n result", &dst));

    Ok(())
}
