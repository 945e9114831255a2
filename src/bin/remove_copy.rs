use anyhow::Result;
use parallel_algorithms::report::{self, sequence_line};
use parallel_algorithms::{remove_copy, remove_copy_if, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![1i32; 10];
    let mut copy = vec![0i32; 10];
    vec[5] = 7;

    let new_end = remove_copy(ExecutionPolicy::Sequential, &vec, &mut copy, &7);
    copy.truncate(new_end);
    println!("{}", sequence_line("remove_copy result", &copy));

    copy.resize(10, 0);

    let new_end = remove_copy_if(ExecutionPolicy::ParallelUnordered, &vec, &mut copy, |x: &i32| *x == 7);
    copy.truncate(new_end);
    println!("{}", sequence_line("remove_copy_if result", &copy));

    Ok(())
}
