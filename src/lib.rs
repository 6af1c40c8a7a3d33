//! Stable merge sort over slices of any `Ord` type, with a small interactive demo and a benchmark harness.

pub mod bench;
pub mod driver;
pub mod merge_sort;

pub use merge_sort::{merge, merge_sort, merge_sort_bottom_up, merge_sorted};
