use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{iota, transform, transform_binary, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut src = vec![0i32; 10];
    let mut dst = vec![0i32; 10];
    iota(&mut src, 0);

    transform(ExecutionPolicy::Sequential, &src, &mut dst, |x: &i32| -x);
    println!("{}", sequence_line("unary transform result", &dst));

    // dst is both an input and the output
    let negated = dst.clone();
    transform_binary(ExecutionPolicy::ParallelUnordered, &src, &negated, &mut dst, |a: &i32, b: &i32| a + b);
    println!("{}", sequence_line("binary transform result", &dst));

    Ok(())
}
