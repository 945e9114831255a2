// Transforming family: operations that write element by element into a
// destination, or overwrite a range in place.
//
// Operations with a destination return the number of elements written. A
// destination shorter than the source is a caller error and panics.

use crate::policy::Tuning;
use crate::split::{for_each_chunk_mut, zip_chunks_mut};
use num_traits::identities::One;
use std::mem::take;
use std::ops::AddAssign;

pub(crate) fn check_dest(required: usize, found: usize) {
    if found < required {
        panic!(
            "provided destination buffer is too small! (required: {}, found: {})",
            required, found
        );
    }
}

fn check_count(n: usize, len: usize) {
    if n > len {
        panic!("count exceeds range length! (count: {}, length: {})", n, len);
    }
}

// Clone `src` into the front of `dst`.
pub fn copy<T>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T]) -> usize
where
    T: Clone + Send + Sync,
{
    check_dest(src.len(), dst.len());
    for_each_chunk_mut(&mut dst[..src.len()], policy.into(), &|chunk: &mut [T], base: usize| {
        chunk.clone_from_slice(&src[base..base + chunk.len()]);
    });
    src.len()
}

// Clone the first `n` elements of `src` into `dst`.
pub fn copy_n<T>(policy: impl Into<Tuning>, src: &[T], n: usize, dst: &mut [T]) -> usize
where
    T: Clone + Send + Sync,
{
    check_count(n, src.len());
    copy(policy, &src[..n], dst)
}

// Move `src` into the front of `dst`, leaving `T::default()` behind.
pub fn move_into<T>(policy: impl Into<Tuning>, src: &mut [T], dst: &mut [T]) -> usize
where
    T: Default + Send,
{
    let n: usize = src.len();
    check_dest(n, dst.len());
    zip_chunks_mut(src, &mut dst[..n], policy.into(), &|from: &mut [T], to: &mut [T]| {
        for (f, t) in from.iter_mut().zip(to.iter_mut()) {
            *t = take(f);
        }
    });
    n
}

// Overwrite every element with a clone of `value`.
pub fn fill<T>(policy: impl Into<Tuning>, array: &mut [T], value: &T)
where
    T: Clone + Send + Sync,
{
    for_each_chunk_mut(array, policy.into(), &|chunk: &mut [T], _base: usize| {
        chunk.fill(value.clone());
    });
}

// Overwrite the first `n` elements with clones of `value`.
pub fn fill_n<T>(policy: impl Into<Tuning>, array: &mut [T], n: usize, value: &T) -> usize
where
    T: Clone + Send + Sync,
{
    check_count(n, array.len());
    fill(policy, &mut array[..n], value);
    n
}

// Overwrite every element with the result of `gen`.
//
// Under a parallel policy `gen` runs concurrently, so it should not depend
// on how many times it has been called.
pub fn generate<T, G>(policy: impl Into<Tuning>, array: &mut [T], gen: G)
where
    T: Send,
    G: Fn() -> T + Sync,
{
    for_each_chunk_mut(array, policy.into(), &|chunk: &mut [T], _base: usize| {
        for t in chunk.iter_mut() {
            *t = gen();
        }
    });
}

// Overwrite the first `n` elements with the result of `gen`.
pub fn generate_n<T, G>(policy: impl Into<Tuning>, array: &mut [T], n: usize, gen: G) -> usize
where
    T: Send,
    G: Fn() -> T + Sync,
{
    check_count(n, array.len());
    generate(policy, &mut array[..n], gen);
    n
}

// Write `f(&src[i])` to `dst[i]` for every `i` of `src`.
pub fn transform<T, U, F>(policy: impl Into<Tuning>, src: &[T], dst: &mut [U], f: F) -> usize
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    check_dest(src.len(), dst.len());
    for_each_chunk_mut(&mut dst[..src.len()], policy.into(), &|chunk: &mut [U], base: usize| {
        for (u, t) in chunk.iter_mut().zip(&src[base..]) {
            *u = f(t);
        }
    });
    src.len()
}

// Write `f(&a[i], &b[i])` to `dst[i]` for every `i` of `a`.
//
// `b` must be at least as long as `a`.
pub fn transform_binary<A, B, U, F>(policy: impl Into<Tuning>, a: &[A], b: &[B], dst: &mut [U], f: F) -> usize
where
    A: Sync,
    B: Sync,
    U: Send,
    F: Fn(&A, &B) -> U + Sync,
{
    check_count(a.len(), b.len());
    check_dest(a.len(), dst.len());
    for_each_chunk_mut(&mut dst[..a.len()], policy.into(), &|chunk: &mut [U], base: usize| {
        for (i, u) in chunk.iter_mut().enumerate() {
            *u = f(&a[base + i], &b[base + i]);
        }
    });
    a.len()
}

// Replace every element equal to `old` with a clone of `new`.
pub fn replace<T>(policy: impl Into<Tuning>, array: &mut [T], old: &T, new: &T)
where
    T: PartialEq + Clone + Send + Sync,
{
    replace_if(policy, array, |t: &T| t == old, new);
}

// Replace every element for which `pred` holds with a clone of `new`.
pub fn replace_if<T, P>(policy: impl Into<Tuning>, array: &mut [T], pred: P, new: &T)
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    for_each_chunk_mut(array, policy.into(), &|chunk: &mut [T], _base: usize| {
        for t in chunk.iter_mut() {
            if pred(t) {
                *t = new.clone();
            }
        }
    });
}

// Fill `array` with `start, start + 1, start + 2, ...`.
pub fn iota<T>(array: &mut [T], start: T)
where
    T: Clone + One + AddAssign,
{
    let mut next: T = start;
    for t in array.iter_mut() {
        *t = next.clone();
        next += T::one();
    }
}
