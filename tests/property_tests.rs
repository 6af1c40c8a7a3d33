//! Property-based tests for the merge sort variants
//!
//! Each property is checked against many randomly generated inputs, with the standard library's stable sort
//! as the reference.

use std::cmp::Ordering;

use mergesort::{merge_sort, merge_sort_bottom_up, merge_sorted};
use proptest::prelude::*;

/// Compares on `key` only; `pos` records the original index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tagged {
    key: u8,
    pos: usize,
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn tagged(keys: &[u8]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(pos, &key)| Tagged { key, pos })
        .collect()
}

proptest! {
    #[test]
    fn output_is_non_descending(mut data in prop::collection::vec(any::<i64>(), 0..512)) {
        merge_sort(&mut data);
        prop_assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn output_is_a_permutation(data in prop::collection::vec(-50i64..50, 0..512)) {
        // Sorting both with a known-good sort and comparing catches dropped or duplicated elements.
        let mut expected = data.clone();
        expected.sort();
        prop_assert_eq!(merge_sorted(&data), expected);
    }

    #[test]
    fn sorting_is_idempotent(data in prop::collection::vec(any::<i32>(), 0..256)) {
        let once = merge_sorted(&data);
        let twice = merge_sorted(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn variants_agree_with_std_stable_sort(keys in prop::collection::vec(0u8..8, 0..300)) {
        // Few distinct keys, so most elements have equal-keyed neighbours whose order must be kept.
        let mut expected = tagged(&keys);
        expected.sort();

        let mut top_down = tagged(&keys);
        merge_sort(&mut top_down);
        prop_assert_eq!(&top_down, &expected);

        let mut bottom_up = tagged(&keys);
        merge_sort_bottom_up(&mut bottom_up);
        prop_assert_eq!(&bottom_up, &expected);

        prop_assert_eq!(merge_sorted(&tagged(&keys)), expected);
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(
        merge_sorted(&[38, 27, 43, 3, 9, 82, 10]),
        vec![3, 9, 10, 27, 38, 43, 82]
    );
    assert_eq!(merge_sorted(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    assert_eq!(merge_sorted(&[1]), vec![1]);
    assert_eq!(merge_sorted::<i64>(&[]), Vec::<i64>::new());
}

#[test]
fn equal_keys_stay_in_input_order() {
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Pair(i32, &'static str);

    impl Ord for Pair {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    impl PartialOrd for Pair {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let mut data = vec![Pair(1, "a"), Pair(1, "b")];
    merge_sort(&mut data);
    assert_eq!(data, vec![Pair(1, "a"), Pair(1, "b")]);

    let mut data = vec![Pair(1, "b"), Pair(0, "z"), Pair(1, "a")];
    merge_sort_bottom_up(&mut data);
    assert_eq!(data, vec![Pair(0, "z"), Pair(1, "b"), Pair(1, "a")]);
}
