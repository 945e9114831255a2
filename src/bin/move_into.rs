use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{iota, move_into, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut src = vec![0i32; 10];
    let mut dst = vec![0i32; 10];
    iota(&mut src, 0);

    move_into(ExecutionPolicy::Sequential, &mut src, &mut dst);
    println!("{}", sequence_line("move result", &dst));

    Ok(())
}
