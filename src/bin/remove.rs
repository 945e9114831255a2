use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{remove, remove_if, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![1i32; 10];
    vec[5] = 7;

    let new_end = remove(ExecutionPolicy::Sequential, &mut vec, &7);
    vec.truncate(new_end);
    println!("{}", sequence_line("remove result", &vec));

    vec.resize(10, 1);
    vec[5] = 7;

    let new_end = remove_if(ExecutionPolicy::ParallelUnordered, &mut vec, |x: &i32| *x == 7);
    vec.truncate(new_end);
    println!("{}", sequence_line("remove_if result", &vec));

    Ok(())
}
