// Filtering family.
//
// In-place operations move the kept elements to the front of the range,
// keeping their relative order, and return the new logical end. They never
// resize anything: truncating the storage past the logical end is a separate
// step for the caller.
//
// The predicate or comparator is called exactly once per element (per
// adjacent pair for `unique`), always against the original contents.

use crate::pack::{pack_count, pack_in_place};
use crate::policy::Tuning;

// Move the elements not equal to `value` to the front. Returns the logical end.
pub fn remove<T>(policy: impl Into<Tuning>, array: &mut [T], value: &T) -> usize
where
    T: PartialEq + Clone + Send + Sync,
{
    remove_if(policy, array, |t: &T| t == value)
}

// Move the elements for which `pred` does not hold to the front. Returns the
// logical end.
pub fn remove_if<T, P>(policy: impl Into<Tuning>, array: &mut [T], pred: P) -> usize
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    pack_in_place(array, &|a: &[T], i: usize| !pred(&a[i]), policy.into())
}

// Copy the elements not equal to `value` into `dst`. Returns the number written.
pub fn remove_copy<T>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T], value: &T) -> usize
where
    T: PartialEq + Clone + Send + Sync,
{
    remove_copy_if(policy, src, dst, |t: &T| t == value)
}

// Copy the elements for which `pred` does not hold into `dst`. Returns the
// number written.
pub fn remove_copy_if<T, P>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T], pred: P) -> usize
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    pack_count(src.len(), &|i: usize| !pred(&src[i]), policy.into()).copy_into(src, dst)
}

// Collapse runs of equal consecutive elements to their first element.
// Returns the logical end.
pub fn unique<T>(policy: impl Into<Tuning>, array: &mut [T]) -> usize
where
    T: PartialEq + Clone + Send + Sync,
{
    unique_by(policy, array, |a: &T, b: &T| a == b)
}

// Collapse runs where `eq(previous, current)` holds. Returns the logical end.
pub fn unique_by<T, E>(policy: impl Into<Tuning>, array: &mut [T], eq: E) -> usize
where
    T: Clone + Send + Sync,
    E: Fn(&T, &T) -> bool + Sync,
{
    pack_in_place(array, &|a: &[T], i: usize| i == 0 || !eq(&a[i - 1], &a[i]), policy.into())
}

// Copy the first element of every run of equal elements into `dst`. Returns
// the number written.
pub fn unique_copy<T>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T]) -> usize
where
    T: PartialEq + Clone + Send + Sync,
{
    unique_copy_by(policy, src, dst, |a: &T, b: &T| a == b)
}

// Comparator form of `unique_copy`.
pub fn unique_copy_by<T, E>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T], eq: E) -> usize
where
    T: Clone + Send + Sync,
    E: Fn(&T, &T) -> bool + Sync,
{
    let keep = |i: usize| i == 0 || !eq(&src[i - 1], &src[i]);
    pack_count(src.len(), &keep, policy.into()).copy_into(src, dst)
}
