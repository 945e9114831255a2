use anyhow::Result;
use parallel_algorithms::report::{self, position_line};
use parallel_algorithms::{find, find_if, find_if_not, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let mut vec = vec![0i32; 10];
    vec[5] = 1;

    let found = find(ExecutionPolicy::Sequential, &vec, &1);
    println!("{}", position_line("find", found, vec.len()));

    let found = find_if(ExecutionPolicy::Sequential, &vec, |x: &i32| *x == 1);
    println!("{}", position_line("find_if", found, vec.len()));

    let found = find_if_not(ExecutionPolicy::Sequential, &vec, |x: &i32| *x == 0);
    println!("{}", position_line("find_if_not", found, vec.len()));

    Ok(())
}
