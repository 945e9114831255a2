use anyhow::Result;
use parallel_algorithms::report::{self, position_line};
use parallel_algorithms::{adjacent_find, adjacent_find_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![0i32; 10];
    vec[1] = 1;

    let found = adjacent_find(ExecutionPolicy::Sequential, &vec);
    println!("{}", position_line("adjacent_find", found, vec.len()));

    let found = adjacent_find_by(ExecutionPolicy::ParallelUnordered, &vec, |x: &i32, y: &i32| x / 2 == y / 2);
    println!("{}", position_line("adjacent_find with predicate", found, vec.len()));

    Ok(())
}
