// divide-and-conquer engine shared by every bulk operation
//
// every helper follows the same shape: process sequentially when the tuning
// says the range is a leaf, otherwise halve the range, hand the left half and
// half the threads to a scoped worker and keep the right half on this thread.

use crate::policy::Tuning;
use std::any::Any;
use std::ops::Range;
use std::panic::resume_unwind;
use std::sync::atomic::{AtomicUsize, Ordering};

// run both halves, the left one on a scoped worker
// a panicking worker is re-raised on the calling thread
pub(crate) fn join<A, B>(left: A, right: B)
where
    A: FnOnce() + Send,
    B: FnOnce(),
{
    let result = crossbeam::scope(|scope| {
        scope.spawn(|_| left());
        right();
    });
    if let Err(payload) = result {
        // crossbeam reports every worker panic in one vector
        match payload.downcast::<Vec<Box<dyn Any + Send + 'static>>>() {
            Ok(mut panics) if !panics.is_empty() => resume_unwind(panics.remove(0)),
            Ok(panics) => resume_unwind(panics),
            Err(payload) => resume_unwind(payload),
        }
    }
}

// order-preserving reduction over an index range
pub(crate) fn reduce<R, L, C>(range: Range<usize>, tuning: Tuning, leaf: &L, combine: &C) -> R
where
    R: Send,
    L: Fn(Range<usize>) -> R + Sync,
    C: Fn(R, R) -> R + Sync,
{
    if tuning.is_leaf(range.len()) {
        // sequential
        leaf(range)
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();
        let mid: usize = range.start + range.len() / 2;
        let (left_range, right_range) = (range.start..mid, mid..range.end);

        let mut left: Option<R> = None;
        let mut right: Option<R> = None;
        join(
            || left = Some(reduce(left_range, left_tuning, leaf, combine)),
            || right = Some(reduce(right_range, right_tuning, leaf, combine)),
        );

        match (left, right) {
            (Some(l), Some(r)) => combine(l, r),
            // join only returns once both halves have been stored
            _ => unreachable!("reduction half missing after join"),
        }
    }
}

// lowest index in the range for which the leaf reports a match
//
// the leaf receives a sub-range and returns the first match inside it; once a
// match is known, sub-ranges starting after it are skipped
pub(crate) fn find_first<L>(range: Range<usize>, tuning: Tuning, leaf: &L) -> Option<usize>
where
    L: Fn(Range<usize>) -> Option<usize> + Sync,
{
    if tuning.is_sequential() {
        return leaf(range);
    }
    let best = AtomicUsize::new(usize::MAX);
    find_first_rec(range, tuning, leaf, &best);
    match best.into_inner() {
        usize::MAX => None,
        i => Some(i),
    }
}

fn find_first_rec<L>(range: Range<usize>, tuning: Tuning, leaf: &L, best: &AtomicUsize)
where
    L: Fn(Range<usize>) -> Option<usize> + Sync,
{
    if range.start >= best.load(Ordering::Relaxed) {
        return;
    }
    if tuning.is_leaf(range.len()) {
        // sequential
        if let Some(i) = leaf(range) {
            best.fetch_min(i, Ordering::Relaxed);
        }
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();
        let mid: usize = range.start + range.len() / 2;
        let (left, right) = (range.start..mid, mid..range.end);
        join(
            || find_first_rec(left, left_tuning, leaf, best),
            || find_first_rec(right, right_tuning, leaf, best),
        );
    }
}

// visit disjoint mutable chunks together with the index of their first element
pub(crate) fn for_each_chunk_mut<T, L>(array: &mut [T], tuning: Tuning, leaf: &L)
where
    T: Send,
    L: Fn(&mut [T], usize) + Sync,
{
    for_each_chunk_mut_rec(array, 0, tuning, leaf);
}

fn for_each_chunk_mut_rec<T, L>(array: &mut [T], base: usize, tuning: Tuning, leaf: &L)
where
    T: Send,
    L: Fn(&mut [T], usize) + Sync,
{
    if tuning.is_leaf(array.len()) {
        // sequential
        leaf(array, base);
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();

        // have to split, since each thread requires unique access...
        let (left, right) = array.split_at_mut(array.len() / 2);
        let right_base: usize = base + left.len();

        join(
            || for_each_chunk_mut_rec(left, base, left_tuning, leaf),
            || for_each_chunk_mut_rec(right, right_base, right_tuning, leaf),
        );
    }
}

// visit two equal-length mutable slices, split at the same positions
pub(crate) fn zip_chunks_mut<A, B, L>(a: &mut [A], b: &mut [B], tuning: Tuning, leaf: &L)
where
    A: Send,
    B: Send,
    L: Fn(&mut [A], &mut [B]) + Sync,
{
    debug_assert_eq!(a.len(), b.len());
    if tuning.is_leaf(a.len()) {
        // sequential
        leaf(a, b);
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();

        let mid: usize = a.len() / 2;
        let (a_left, a_right) = a.split_at_mut(mid);
        let (b_left, b_right) = b.split_at_mut(mid);

        join(
            || zip_chunks_mut(a_left, b_left, left_tuning, leaf),
            || zip_chunks_mut(a_right, b_right, right_tuning, leaf),
        );
    }
}
