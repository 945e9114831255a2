// Counting and predicate family, plus element-wise visits.

use crate::policy::Tuning;
use crate::search::{find_if, mismatch_by};
use crate::split::{for_each_chunk_mut, reduce};
use std::ops::Range;

// Number of elements equal to `value`.
pub fn count<T>(policy: impl Into<Tuning>, array: &[T], value: &T) -> usize
where
    T: PartialEq + Sync,
{
    count_if(policy, array, |t: &T| t == value)
}

// Number of elements for which `pred` holds.
pub fn count_if<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> usize
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    reduce(
        0..array.len(),
        policy.into(),
        &|r: Range<usize>| array[r].iter().filter(|t| pred(t)).count(),
        &|a: usize, b: usize| a + b,
    )
}

// Whether `pred` holds for every element. True for an empty range.
pub fn all_of<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    find_if(policy, array, |t: &T| !pred(t)).is_none()
}

// Whether `pred` holds for at least one element. False for an empty range.
pub fn any_of<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    find_if(policy, array, pred).is_some()
}

// Whether `pred` holds for no element. True for an empty range.
pub fn none_of<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    !any_of(policy, array, pred)
}

// Whether both ranges have the same length and equal elements.
pub fn equal<T>(policy: impl Into<Tuning>, a: &[T], b: &[T]) -> bool
where
    T: PartialEq + Sync,
{
    equal_by(policy, a, b, |x: &T, y: &T| x == y)
}

// Whether both ranges have the same length and `eq` holds position by position.
pub fn equal_by<T, U, E>(policy: impl Into<Tuning>, a: &[T], b: &[U], eq: E) -> bool
where
    T: Sync,
    U: Sync,
    E: Fn(&T, &U) -> bool + Sync,
{
    a.len() == b.len() && mismatch_by(policy, a, b, eq).is_none()
}

// Call `f` on every element. Under a parallel policy the calls happen
// concurrently and in no particular order.
pub fn for_each<T, F>(policy: impl Into<Tuning>, array: &[T], f: F)
where
    T: Sync,
    F: Fn(&T) + Sync,
{
    reduce(
        0..array.len(),
        policy.into(),
        &|r: Range<usize>| array[r].iter().for_each(&f),
        &|_: (), _: ()| (),
    )
}

// Call `f` on every element with mutable access.
pub fn for_each_mut<T, F>(policy: impl Into<Tuning>, array: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync,
{
    for_each_chunk_mut(array, policy.into(), &|chunk: &mut [T], _base: usize| {
        chunk.iter_mut().for_each(&f)
    });
}
