use anyhow::Result;
use parallel_algorithms::report::{self, position_line};
use parallel_algorithms::{find_end, find_end_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let s1 = vec![1, 2, 3];
    let vec = vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];

    let found = find_end(ExecutionPolicy::Sequential, &vec, &s1);
    println!("{}", position_line("find", found, vec.len()));

    let s2 = vec![2, 4, 6];
    let found = find_end_by(ExecutionPolicy::Sequential, &vec, &s2, |x: &i32, y: &i32| *x == y / 2);
    println!("{}", position_line("find with pred", found, vec.len()));

    Ok(())
}
