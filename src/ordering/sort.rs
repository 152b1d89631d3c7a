use std::cmp::Ordering;

/// Stable top-down merge sort returning a new vector.
///
/// The comparator is always called as `(later, earlier)` and only its
/// `Less` answer moves the later element ahead, so equal elements keep their
/// incoming order. Unlike `slice::sort_by` it accepts comparators that are not a total
/// order and never panics on them; the output is whatever the merge sequence
/// produces.
pub fn stable_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(items, &mut compare)
}

fn merge_sort<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], compare);
    let right = merge_sort(&items[mid..], compare);
    merge(&left, &right, compare)
}

fn merge<T, F>(left: &[T], right: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
