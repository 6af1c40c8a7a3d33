//! Two-way stable merge sort.
//!
//! The in-place sorts allocate a single auxiliary buffer up front and ping-pong between it and the caller's slice, so
//! no merge level allocates on its own. [`merge_sorted`] additionally allocates the returned vector.

/// Sorts `data` in place using top-down recursive merge sort.
///
/// Stable: equal elements keep their relative order.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    // Single allocation for auxiliary buffer.
    let mut aux = data.to_vec();
    merge_sort_recursive(data, &mut aux, false);
}

/// Returns a sorted copy of `data`, leaving the input untouched.
pub fn merge_sorted<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    merge_sort(&mut sorted);
    sorted
}

/// Recursively sorts the data by splitting at the midpoint.
///
/// If write_to_aux is true, writes the result to aux. Otherwise, writes the result to data. Both slices hold the same
/// elements on entry.
fn merge_sort_recursive<T: Ord + Clone>(data: &mut [T], aux: &mut [T], write_to_aux: bool) {
    let len = data.len();

    // Base case: a single element is already sorted, it only has to land in the right buffer.
    if len <= 1 {
        if write_to_aux {
            aux.clone_from_slice(data);
        }
        return;
    }

    // Recurse on halves. They write to the opposite buffer, which becomes our merge source.
    let mid = len / 2;
    let not_write_to_aux = !write_to_aux;
    {
        let (data_lo, data_hi) = data.split_at_mut(mid);
        let (aux_lo, aux_hi) = aux.split_at_mut(mid);
        merge_sort_recursive(data_lo, aux_lo, not_write_to_aux);
        merge_sort_recursive(data_hi, aux_hi, not_write_to_aux);
    }

    // Merge.
    let (merge_src, merge_dst) = if write_to_aux {
        (data, aux)
    } else {
        (aux, data)
    };
    let (left, right) = merge_src.split_at(mid);
    merge(left, right, merge_dst);
}

/// Sorts `data` in place by merging runs of width 1, 2, 4, ... without recursion.
///
/// Produces exactly the same order as [`merge_sort`] for equal elements, but the run boundaries differ, so
/// the intermediate merges do too.
pub fn merge_sort_bottom_up<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    let mut aux = data.to_vec();
    let mut width = 1;
    let mut src_is_aux = false;
    while width < len {
        if src_is_aux {
            merge_pass(&aux, data, width);
        } else {
            merge_pass(data, &mut aux, width);
        }
        src_is_aux = !src_is_aux;
        width <<= 1;
    }

    if src_is_aux {
        data.clone_from_slice(&aux);
    }
}

fn merge_pass<T: Ord + Clone>(src: &[T], dst: &mut [T], width: usize) {
    let len = src.len();
    let mut start = 0;
    while start < len {
        let mid = (start + width).min(len);
        let end = (mid + width).min(len);
        merge(&src[start..mid], &src[mid..end], &mut dst[start..end]);
        start = end;
    }
}

/// Merges two sorted runs into `dst`, which must be exactly `left.len() + right.len()` long.
///
/// On ties the element from `left` goes first. That is what makes the sort stable.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T], dst: &mut [T]) {
    debug_assert_eq!(left.len() + right.len(), dst.len());
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            dst[k] = right[j].clone();
            j += 1;
        } else {
            dst[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    // Drain whichever side is left over.
    dst[k..k + left.len() - i].clone_from_slice(&left[i..]);
    k += left.len() - i;
    dst[k..].clone_from_slice(&right[j..]);
}
