// Search family: positions of the first (or last) element or subsequence
// that satisfies a condition.
//
// Every function returns the index into its first range, or `None` when
// nothing qualifies. Under `ExecutionPolicy::ParallelUnordered` the range is
// searched by several workers at once; the result is still the lowest
// qualifying index.

use crate::policy::Tuning;
use crate::split::{find_first, reduce};
use std::ops::Range;

// Index of the first element equal to `value`.
pub fn find<T>(policy: impl Into<Tuning>, array: &[T], value: &T) -> Option<usize>
where
    T: PartialEq + Sync,
{
    find_if(policy, array, |t: &T| t == value)
}

// Index of the first element for which `pred` holds.
pub fn find_if<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> Option<usize>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    find_first(0..array.len(), policy.into(), &|r: Range<usize>| {
        let start = r.start;
        array[r].iter().position(&pred).map(|i| start + i)
    })
}

// Index of the first element for which `pred` does not hold.
pub fn find_if_not<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> Option<usize>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    find_if(policy, array, |t: &T| !pred(t))
}

// Index of the first element equal to its successor.
pub fn adjacent_find<T>(policy: impl Into<Tuning>, array: &[T]) -> Option<usize>
where
    T: PartialEq + Sync,
{
    adjacent_find_by(policy, array, |a: &T, b: &T| a == b)
}

// Index `i` of the first pair with `pred(&array[i], &array[i + 1])`.
pub fn adjacent_find_by<T, P>(policy: impl Into<Tuning>, array: &[T], pred: P) -> Option<usize>
where
    T: Sync,
    P: Fn(&T, &T) -> bool + Sync,
{
    let pairs: usize = array.len().saturating_sub(1);
    find_first(0..pairs, policy.into(), &|r: Range<usize>| {
        r.into_iter().find(|&i| pred(&array[i], &array[i + 1]))
    })
}

// First index at which `a` and `b` differ, looking at their common prefix.
pub fn mismatch<T>(policy: impl Into<Tuning>, a: &[T], b: &[T]) -> Option<usize>
where
    T: PartialEq + Sync,
{
    mismatch_by(policy, a, b, |x: &T, y: &T| x == y)
}

// First index `i` below `min(a.len(), b.len())` where `eq(&a[i], &b[i])`
// fails. `None` when the common prefix matches entirely.
pub fn mismatch_by<T, U, E>(policy: impl Into<Tuning>, a: &[T], b: &[U], eq: E) -> Option<usize>
where
    T: Sync,
    U: Sync,
    E: Fn(&T, &U) -> bool + Sync,
{
    let len: usize = a.len().min(b.len());
    find_first(0..len, policy.into(), &|r: Range<usize>| {
        r.into_iter().find(|&i| !eq(&a[i], &b[i]))
    })
}

// Index of the first occurrence of `pattern` in `haystack`.
//
// An empty pattern is found at index 0, even in an empty haystack.
pub fn search<T>(policy: impl Into<Tuning>, haystack: &[T], pattern: &[T]) -> Option<usize>
where
    T: PartialEq + Sync,
{
    search_by(policy, haystack, pattern, |x: &T, y: &T| x == y)
}

// Index of the first `i` where `eq(&haystack[i + k], &pattern[k])` holds for
// every `k` of the pattern.
pub fn search_by<T, U, E>(policy: impl Into<Tuning>, haystack: &[T], pattern: &[U], eq: E) -> Option<usize>
where
    T: Sync,
    U: Sync,
    E: Fn(&T, &U) -> bool + Sync,
{
    if pattern.is_empty() {
        return Some(0);
    }
    let starts: usize = match candidate_starts(haystack, pattern) {
        Some(n) => n,
        None => return None,
    };
    find_first(0..starts, policy.into(), &|r: Range<usize>| {
        r.into_iter().find(|&i| matches_at(haystack, pattern, i, &eq))
    })
}

// Index of the last occurrence of `pattern` in `haystack`.
//
// An empty pattern is found at index 0, as with `search`, not at
// `haystack.len()` where a last-occurrence search would usually place it.
pub fn find_end<T>(policy: impl Into<Tuning>, haystack: &[T], pattern: &[T]) -> Option<usize>
where
    T: PartialEq + Sync,
{
    find_end_by(policy, haystack, pattern, |x: &T, y: &T| x == y)
}

// Last-occurrence counterpart of `search_by`. An empty pattern gives
// `Some(0)`, the same as `find_end`.
pub fn find_end_by<T, U, E>(policy: impl Into<Tuning>, haystack: &[T], pattern: &[U], eq: E) -> Option<usize>
where
    T: Sync,
    U: Sync,
    E: Fn(&T, &U) -> bool + Sync,
{
    if pattern.is_empty() {
        return Some(0);
    }
    let starts: usize = match candidate_starts(haystack, pattern) {
        Some(n) => n,
        None => return None,
    };
    reduce(
        0..starts,
        policy.into(),
        &|r: Range<usize>| r.into_iter().rev().find(|&i| matches_at(haystack, pattern, i, &eq)),
        &|left: Option<usize>, right: Option<usize>| right.or(left),
    )
}

// Index of the first element of `array` equal to any element of `set`.
pub fn find_first_of<T>(policy: impl Into<Tuning>, array: &[T], set: &[T]) -> Option<usize>
where
    T: PartialEq + Sync,
{
    find_first_of_by(policy, array, set, |x: &T, y: &T| x == y)
}

// Index of the first `i` with `eq(&array[i], s)` for some `s` in `set`.
// An empty set never matches.
pub fn find_first_of_by<T, U, E>(policy: impl Into<Tuning>, array: &[T], set: &[U], eq: E) -> Option<usize>
where
    T: Sync,
    U: Sync,
    E: Fn(&T, &U) -> bool + Sync,
{
    find_if(policy, array, |t: &T| set.iter().any(|s| eq(t, s)))
}

// number of positions a non-empty pattern can start at
fn candidate_starts<T, U>(haystack: &[T], pattern: &[U]) -> Option<usize> {
    if pattern.len() > haystack.len() {
        None
    } else {
        Some(haystack.len() - pattern.len() + 1)
    }
}

fn matches_at<T, U, E>(haystack: &[T], pattern: &[U], start: usize, eq: &E) -> bool
where
    E: Fn(&T, &U) -> bool,
{
    haystack[start..start + pattern.len()]
        .iter()
        .zip(pattern)
        .all(|(h, p)| eq(h, p))
}

// run some tests
#[cfg(test)]
mod tests {
    use crate::policy::{ExecutionPolicy, Tuning};
    use crate::search::*;
    use proptest::prelude::*;

    const SEQ: ExecutionPolicy = ExecutionPolicy::Sequential;
    const PAR: ExecutionPolicy = ExecutionPolicy::ParallelUnordered;

    fn full_par() -> Tuning {
        Tuning::new(usize::MAX, 1).unwrap()
    }

    #[test]
    fn test_find_sentinel() {
        let mut vec = vec![0i32; 10];
        vec[5] = 1;
        assert_eq!(find(SEQ, &vec, &1), Some(5));
        assert_eq!(find_if(SEQ, &vec, |x: &i32| *x == 1), Some(5));
        assert_eq!(find_if_not(SEQ, &vec, |x: &i32| *x == 0), Some(5));
        assert_eq!(find(full_par(), &vec, &1), Some(5));
        assert_eq!(find(SEQ, &vec, &2), None);
    }

    #[test]
    fn test_find_empty() {
        let vec: Vec<i32> = Vec::new();
        assert_eq!(find(SEQ, &vec, &0), None);
        assert_eq!(find(PAR, &vec, &0), None);
        assert_eq!(adjacent_find(full_par(), &vec), None);
    }

    #[test]
    fn test_find_lowest_of_many() {
        let vec: Vec<u32> = (0..10000).map(|i| i % 1000).collect();
        assert_eq!(find(full_par(), &vec, &999), Some(999));
        assert_eq!(find(Tuning::new(7, 13).unwrap(), &vec, &3), Some(3));
    }

    #[test]
    fn test_adjacent_find() {
        let mut vec = vec![0i32; 10];
        vec[1] = 1;
        assert_eq!(adjacent_find(SEQ, &vec), Some(2));
        assert_eq!(adjacent_find_by(PAR, &vec, |x: &i32, y: &i32| x / 2 == y / 2), Some(0));
        assert_eq!(adjacent_find(SEQ, &[1, 2, 3]), None);
        assert_eq!(adjacent_find(SEQ, &[1]), None);
    }

    #[test]
    fn test_mismatch() {
        let x = vec![0i32; 10];
        let mut y = vec![0i32; 10];
        y[7] = 1;
        assert_eq!(mismatch(SEQ, &x, &y), Some(7));
        assert_eq!(mismatch_by(full_par(), &x, &y, |a: &i32, b: &i32| a / 2 == b / 2), None);
        assert_eq!(mismatch(SEQ, &x[..5], &y), None);
        assert_eq!(mismatch(SEQ, &x, &x), None);
    }

    #[test]
    fn test_find_end() {
        let s1 = vec![1, 2, 3];
        let vec = vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
        assert_eq!(find_end(SEQ, &vec, &s1), Some(8));
        assert_eq!(find_end(full_par(), &vec, &s1), Some(8));

        let s2 = vec![2, 4, 6];
        assert_eq!(find_end_by(SEQ, &vec, &s2, |x: &i32, y: &i32| *x == y / 2), Some(8));
        assert_eq!(find_end(SEQ, &vec, &[4, 4]), None);
        assert_eq!(find_end(SEQ, &s1, &vec), None);
    }

    #[test]
    fn test_search() {
        let vec = vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
        assert_eq!(search(SEQ, &vec, &[3, 4, 1]), Some(2));
        assert_eq!(search(full_par(), &vec, &[3, 4, 1]), Some(2));
        assert_eq!(search(SEQ, &vec, &[4]), Some(3));
        assert_eq!(search(SEQ, &vec, &[5]), None);
    }

    // an empty pattern is found at the start position
    #[test]
    fn test_empty_pattern_found_at_start() {
        let empty: Vec<i32> = Vec::new();
        let vec = vec![1, 2, 3];
        assert_eq!(search(SEQ, &vec, &empty), Some(0));
        assert_eq!(search(PAR, &empty, &empty), Some(0));
        assert_eq!(find_end(SEQ, &vec, &empty), Some(0));
        assert_eq!(find_end(PAR, &empty, &empty), Some(0));
        assert_eq!(find_end(full_par(), &vec, &empty), Some(0));
        assert_eq!(find_end_by(full_par(), &vec, &empty, |x: &i32, y: &i32| x == y), Some(0));
    }

    #[test]
    fn test_find_first_of() {
        let v = vec![0, 2, 3, 25, 5];
        let t1 = vec![3, 19, 10, 2];
        assert_eq!(find_first_of(SEQ, &v, &t1), Some(1));
        let t2 = vec![6, 38, 20, 4];
        assert_eq!(find_first_of_by(full_par(), &v, &t2, |x: &i32, y: &i32| *x == y / 2), Some(1));
        assert_eq!(find_first_of(SEQ, &v, &[]), None);
        assert_eq!(find_first_of(SEQ, &v, &[7, 8]), None);
    }

    proptest! {
        #[test]
        fn search_family_same_under_every_policy(
            hay in proptest::collection::vec(0u8..4, 0..200),
            pattern in proptest::collection::vec(0u8..4, 0..4),
            threads in 2usize..16,
            seq_threshold in 1usize..8,
        ) {
            let par = Tuning::new(threads, seq_threshold).unwrap();
            prop_assert_eq!(find(SEQ, &hay, &3), find(par, &hay, &3));
            prop_assert_eq!(find(SEQ, &hay, &3), hay.iter().position(|x| *x == 3));
            let low = |x: &u8| *x < 3;
            prop_assert_eq!(find_if_not(par, &hay, low), hay.iter().position(|x| !low(x)));
            prop_assert_eq!(find_if_not(SEQ, &hay, low), find_if_not(par, &hay, low));
            prop_assert_eq!(adjacent_find(SEQ, &hay), adjacent_find(par, &hay));
            prop_assert_eq!(search(SEQ, &hay, &pattern), search(par, &hay, &pattern));
            prop_assert_eq!(find_end(SEQ, &hay, &pattern), find_end(par, &hay, &pattern));
            prop_assert_eq!(find_first_of(SEQ, &hay, &pattern), find_first_of(par, &hay, &pattern));
            let shifted: Vec<u8> = hay.iter().map(|x| (x + 1) % 4).collect();
            prop_assert_eq!(mismatch(SEQ, &hay, &shifted), mismatch(par, &hay, &shifted));
        }
    }
}
