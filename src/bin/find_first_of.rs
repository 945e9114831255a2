use anyhow::Result;
use parallel_algorithms::report::{self, position_line};
use parallel_algorithms::{find_first_of, find_first_of_by, ExecutionPolicy};

fn main() -> Result<()> {
    report::init()?;

    let v = vec![0, 2, 3, 25, 5];
    let t1 = vec![3, 19, 10, 2];

    let found = find_first_of(ExecutionPolicy::Default, &v, &t1);
    println!("{}", position_line("find_first_of", found, v.len()));

    let t2 = vec![6, 38, 20, 4];
    let found = find_first_of_by(ExecutionPolicy::Default, &v, &t2, |x: &i32, y: &i32| *x == y / 2);
    println!("{}", position_line("find_first_of with pred", found, v.len()));

    Ok(())
}
