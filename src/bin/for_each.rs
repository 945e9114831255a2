use anyhow::Result;
use parallel_algorithms::report;
use parallel_algorithms::{for_each, ExecutionPolicy};

// each element is printed from inside the callback, so under a parallel
// policy the values may come out in any order
fn print_each(label: &str, policy: ExecutionPolicy, vec: &[i32]) {
    print!("{}:", label);
    for_each(policy, vec, |x: &i32| print!(" {}", x));
    println!();
}

fn main() -> Result<()> {
    report::init()?;

    let vec = vec![0i32; 10];

    print_each("for_each par", ExecutionPolicy::ParallelUnordered, &vec);
    print_each("for_each seq", ExecutionPolicy::Sequential, &vec);

    let mut exec = ExecutionPolicy::default();
    print_each("for_each default", exec, &vec);

    exec = ExecutionPolicy::Sequential;
    print_each("for_each exec = seq", exec, &vec);

    exec = ExecutionPolicy::ParallelUnordered;
    print_each("for_each exec = par", exec, &vec);

    Ok(())
}
