// stable parallel pack: copy the elements selected by a keep function to the
// front of a destination, preserving their relative order
//
// two passes over the source. the first evaluates the keep function once per
// element into a mask and records the number of kept elements of every subtree
// in a prefix tree. the second walks the same splits and copies each subtree's
// kept elements into its own, disjoint, window of the destination.

use crate::policy::Tuning;
use crate::split::{for_each_chunk_mut, join};

struct PrefixTree {
    sum: usize,
    left: Option<Box<PrefixTree>>,
    right: Option<Box<PrefixTree>>,
}

impl PrefixTree {
    fn new() -> Self {
        PrefixTree {
            sum: 0,
            left: None,
            right: None,
        }
    }

    fn children(&self) -> Option<(&PrefixTree, &PrefixTree)> {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}

// Result of the counting pass, ready to scatter into a destination.
pub(crate) struct Packed {
    mask: Vec<bool>,
    tree: PrefixTree,
}

impl Packed {
    // Number of elements the keep function selected.
    pub(crate) fn len(&self) -> usize {
        self.tree.sum
    }

    // Clone the selected elements of `src` into the front of `dest`.
    // `src` must be the range the mask was computed over.
    pub(crate) fn copy_into<T>(&self, src: &[T], dest: &mut [T]) -> usize
    where
        T: Clone + Send + Sync,
    {
        assert_eq!(src.len(), self.mask.len());
        if dest.len() < self.tree.sum {
            panic!(
                "provided destination buffer is too small! (required: {}, found: {})",
                self.tree.sum,
                dest.len()
            );
        }
        pack_copy(src, &mut dest[..self.tree.sum], &self.mask, &self.tree);
        self.tree.sum
    }
}

// evaluate the keep function for every index of 0..len and build the prefix tree
// keep(i) is called exactly once per index
pub(crate) fn pack_count<K>(len: usize, keep: &K, tuning: Tuning) -> Packed
where
    K: Fn(usize) -> bool + Sync,
{
    let mut mask: Vec<bool> = vec![false; len];
    let mut tree: PrefixTree = PrefixTree::new();
    pack_count_rec(&mut mask, 0, &mut tree, keep, tuning);
    Packed { mask, tree }
}

fn pack_count_rec<K>(mask: &mut [bool], base: usize, tree: &mut PrefixTree, keep: &K, tuning: Tuning)
where
    K: Fn(usize) -> bool + Sync,
{
    if tuning.is_leaf(mask.len()) {
        // sequential
        for (i, m) in mask.iter_mut().enumerate() {
            *m = keep(base + i);
            tree.sum += *m as usize;
        }
    } else {
        // parallel
        let (left_tuning, right_tuning) = tuning.split();

        let (left_mask, right_mask) = mask.split_at_mut(mask.len() / 2);
        let right_base: usize = base + left_mask.len();

        let mut left_tree: PrefixTree = PrefixTree::new();
        let mut right_tree: PrefixTree = PrefixTree::new();

        join(
            || pack_count_rec(left_mask, base, &mut left_tree, keep, left_tuning),
            || pack_count_rec(right_mask, right_base, &mut right_tree, keep, right_tuning),
        );

        tree.sum = left_tree.sum + right_tree.sum;
        tree.left = Some(Box::new(left_tree));
        tree.right = Some(Box::new(right_tree));
    }
}

// the copy pass splits wherever the counting pass did
fn pack_copy<T>(src: &[T], dest: &mut [T], mask: &[bool], tree: &PrefixTree)
where
    T: Clone + Send + Sync,
{
    match tree.children() {
        Some((left_tree, right_tree)) => {
            // parallel
            let mid: usize = src.len() / 2;
            let (src_left, src_right) = src.split_at(mid);
            let (mask_left, mask_right) = mask.split_at(mid);
            let (dest_left, dest_right) = dest.split_at_mut(left_tree.sum);

            join(
                || pack_copy(src_left, dest_left, mask_left, left_tree),
                || pack_copy(src_right, dest_right, mask_right, right_tree),
            );
        }
        None => {
            // sequential
            let mut j: usize = 0;
            for (t, keep) in src.iter().zip(mask) {
                if *keep {
                    dest[j] = t.clone();
                    j += 1;
                }
            }
        }
    }
}

// stable in-place compaction of the elements selected by keep(array, i)
//
// every keep call sees the array as it was before compaction started. returns
// the new logical end; elements past it are valid but unspecified.
pub(crate) fn pack_in_place<T, K>(array: &mut [T], keep: &K, tuning: Tuning) -> usize
where
    T: Clone + Send + Sync,
    K: Fn(&[T], usize) -> bool + Sync,
{
    if tuning.is_leaf(array.len()) {
        // sequential, swap kept elements forward
        let mask: Vec<bool> = {
            let shared: &[T] = array;
            (0..shared.len()).map(|i| keep(shared, i)).collect()
        };
        let mut j: usize = 0;
        for (i, kept) in mask.into_iter().enumerate() {
            if kept {
                if i != j {
                    array.swap(i, j);
                }
                j += 1;
            }
        }
        return j;
    }

    // parallel, output windows overlap their sources so go through a scratch buffer
    let packed: Packed = {
        let shared: &[T] = array;
        pack_count(shared.len(), &|i: usize| keep(shared, i), tuning)
    };
    let len: usize = packed.len();
    if len == array.len() {
        return len;
    }
    let mut scratch: Vec<T> = array[..len].to_vec();
    packed.copy_into(array, &mut scratch);
    for_each_chunk_mut(&mut array[..len], tuning, &|chunk: &mut [T], base: usize| {
        chunk.clone_from_slice(&scratch[base..base + chunk.len()]);
    });
    len
}

// run some tests
#[cfg(test)]
mod tests {
    use crate::pack::*;
    use crate::policy::Tuning;
    use std::time::Instant;

    const N: usize = 1000000;
    const N_SMALL: usize = 35;

    fn alloc_copy<T, K>(src: &[T], keep: &K, tuning: Tuning) -> Vec<T>
    where
        T: Clone + Default + Send + Sync,
        K: Fn(&T) -> bool + Sync,
    {
        let packed = pack_count(src.len(), &|i: usize| keep(&src[i]), tuning);
        let mut out: Vec<T> = vec![T::default(); packed.len()];
        packed.copy_into(src, &mut out);
        out
    }

    // test parallel pack algorithm
    #[test]
    fn test_parallel_pack_small() {
        let par: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 12];
        let out = alloc_copy(&par, &|a: &u8| *a % 3 == 0, Tuning::new(12, 1).unwrap());
        assert_eq!(out, vec![3, 6, 9, 12]);
    }

    // test parallel pack algorithm another time
    #[test]
    fn test_parallel_pack_small_2() {
        let mut par: Vec<usize> = Vec::new();
        let mut seq: Vec<usize> = Vec::new();
        for i in 0..N_SMALL {
            par.push(i);
            if i % 3 == 0 {
                seq.push(i);
            }
        }
        let out = alloc_copy(&par, &|a: &usize| *a % 3 == 0, Tuning::new(12, 1).unwrap());
        assert_eq!(out, seq);
    }

    #[test]
    fn test_pack_empty() {
        let src: Vec<u32> = Vec::new();
        let out = alloc_copy(&src, &|_: &u32| true, Tuning::new(4, 1).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn test_pack_dest_too_small() {
        let src: Vec<u32> = vec![1, 2, 3, 4];
        let packed = pack_count(src.len(), &|_: usize| true, Tuning::new(4, 1).unwrap());
        let mut dest = vec![0u32; 2];
        packed.copy_into(&src, &mut dest);
    }

    #[test]
    fn test_pack_in_place_matches_retain() {
        for tuning in [Tuning::sequential(), Tuning::new(8, 2).unwrap(), Tuning::new(usize::MAX, 1).unwrap()] {
            let mut arr: Vec<usize> = (0..N_SMALL).collect();
            let end = pack_in_place(&mut arr, &|a: &[usize], i: usize| a[i] % 4 != 1, tuning);
            arr.truncate(end);
            let mut expected: Vec<usize> = (0..N_SMALL).collect();
            expected.retain(|v| v % 4 != 1);
            assert_eq!(arr, expected);
        }
    }

    // keep functions that look at neighbours see the original contents
    #[test]
    fn test_pack_in_place_reads_original() {
        for tuning in [Tuning::sequential(), Tuning::new(8, 2).unwrap()] {
            let mut arr: Vec<u32> = vec![0, 0, 1, 1, 1, 2, 3, 3, 4, 4, 4, 4, 5];
            let end = pack_in_place(&mut arr, &|a: &[u32], i: usize| i == 0 || a[i - 1] != a[i], tuning);
            assert_eq!(&arr[..end], &[0, 1, 2, 3, 4, 5]);
        }
    }

    // test parallel pack against a sequential filter on a large input
    #[test]
    fn test_parallel_pack_large() {
        // generate some data
        let mut array: Vec<u128> = Vec::new();
        for i in 0..N {
            let i: u128 = i as u128;
            array.push(64 + i * i - 8 * i + 5);
        }

        // time parallel algorithm
        let start_par = Instant::now();
        let par = alloc_copy(&array, &|a: &u128| *a % 2 == 0, Tuning::new(24, 256).unwrap());
        let dur_par = start_par.elapsed();

        // time sequential algorithm
        let start_seq = Instant::now();
        let seq: Vec<u128> = array.iter().copied().filter(|a| *a % 2 == 0).collect();
        let dur_seq = start_seq.elapsed();

        // check integrity of results
        assert_eq!(seq, par);

        // print results
        println!(
            ">>> PACK: parallel_pack = {:?}, sequential_pack = {:?}, source_len = {}, pack_len = {}",
            dur_par,
            dur_seq,
            N,
            par.len()
        );
    }
}
