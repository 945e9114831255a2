use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{iota, transform, unique_by, unique_copy_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut series = vec![0i32; 10];
    let mut vec = vec![0i32; 10];
    let mut copy = vec![0i32; 10];
    iota(&mut series, 0);
    transform(ExecutionPolicy::Default, &series, &mut vec, |i: &i32| i / 2);

    let new_end = unique_copy_by(ExecutionPolicy::Sequential, &vec, &mut copy, |a: &i32, b: &i32| a == b);
    copy.truncate(new_end);
    println!("{}", sequence_line("unique_copy result", &copy));

    let new_end = unique_by(ExecutionPolicy::ParallelUnordered, &mut vec, |a: &i32, b: &i32| a == b);
    vec.truncate(new_end);
    println!("{}", sequence_line("unique result", &vec));

    Ok(())
}
