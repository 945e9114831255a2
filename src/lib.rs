// implementation of common sequence algorithms in rust, each callable with a
// sequential or a parallel execution policy
// - search: find, adjacent_find, mismatch, search, find_end, find_first_of
// - counting: count, all_of / any_of / none_of, equal, for_each
// - transforming: copy, move, fill, generate, transform, replace
// - filtering: remove, remove_copy, unique, unique_copy
// - rearranging: reverse, reverse_copy, swap_ranges

pub mod filter;
pub mod logical;
pub mod modify;
mod pack;
pub mod policy;
pub mod rearrange;
pub mod report;
pub mod search;
mod split;

pub use filter::{remove, remove_copy, remove_copy_if, remove_if, unique, unique_by, unique_copy, unique_copy_by};
pub use logical::{all_of, any_of, count, count_if, equal, equal_by, for_each, for_each_mut, none_of};
pub use modify::{
    copy, copy_n, fill, fill_n, generate, generate_n, iota, move_into, replace, replace_if, transform,
    transform_binary,
};
pub use policy::{ExecutionPolicy, Tuning, TuningError};
pub use rearrange::{reverse, reverse_copy, swap_ranges};
pub use search::{
    adjacent_find, adjacent_find_by, find, find_end, find_end_by, find_first_of, find_first_of_by, find_if,
    find_if_not, mismatch, mismatch_by, search, search_by,
};
