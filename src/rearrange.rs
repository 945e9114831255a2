// Rearranging family: reverse, reverse_copy and swap_ranges.

use crate::modify::check_dest;
use crate::policy::Tuning;
use crate::split::{for_each_chunk_mut, join, zip_chunks_mut};
use std::mem::swap;

// Reverse the range in place.
pub fn reverse<T>(policy: impl Into<Tuning>, array: &mut [T])
where
    T: Send,
{
    let half: usize = array.len() / 2;
    let len: usize = array.len();
    let (front, rest) = array.split_at_mut(half);
    // the middle element of an odd-length range stays put
    let back: &mut [T] = &mut rest[len - 2 * half..];
    swap_mirrored(front, back, policy.into());
}

// swap front[i] with back[back.len() - 1 - i]
fn swap_mirrored<T>(front: &mut [T], back: &mut [T], tuning: Tuning)
where
    T: Send,
{
    if tuning.is_leaf(front.len()) {
        // sequential
        for (f, b) in front.iter_mut().zip(back.iter_mut().rev()) {
            swap(f, b);
        }
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();

        // the first half of front mirrors the last half of back
        let mid: usize = front.len() / 2;
        let back_mid: usize = back.len() - mid;
        let (front_left, front_right) = front.split_at_mut(mid);
        let (back_left, back_right) = back.split_at_mut(back_mid);

        join(
            || swap_mirrored(front_left, back_right, left_tuning),
            || swap_mirrored(front_right, back_left, right_tuning),
        );
    }
}

// Clone `src` into `dst` in reverse order. Returns the number written.
pub fn reverse_copy<T>(policy: impl Into<Tuning>, src: &[T], dst: &mut [T]) -> usize
where
    T: Clone + Send + Sync,
{
    let n: usize = src.len();
    check_dest(n, dst.len());
    for_each_chunk_mut(&mut dst[..n], policy.into(), &|chunk: &mut [T], base: usize| {
        for (i, t) in chunk.iter_mut().enumerate() {
            *t = src[n - 1 - (base + i)].clone();
        }
    });
    n
}

// Exchange the contents of two equal-length ranges position by position.
pub fn swap_ranges<T>(policy: impl Into<Tuning>, a: &mut [T], b: &mut [T]) -> usize
where
    T: Send,
{
    if a.len() != b.len() {
        panic!(
            "ranges must have the same length! (left: {}, right: {})",
            a.len(),
            b.len()
        );
    }
    zip_chunks_mut(a, b, policy.into(), &|x: &mut [T], y: &mut [T]| x.swap_with_slice(y));
    a.len()
}
