//! Linear-time kernels over sorted, deduplicated slices.
//!
//! Every function here assumes both inputs are sorted in strictly ascending
//! order. Each kernel walks the two slices once with a pair of indices, so
//! the cost is O(n + m). When the value ranges of the two slices do not
//! overlap, the kernels skip element comparison entirely.

use std::cmp::Ordering;

/// Returns `true` when the value ranges of two sorted slices do not overlap.
///
/// An empty slice is disjoint from everything.
pub(crate) fn ranges_disjoint<T: Ord>(left: &[T], right: &[T]) -> bool {
    match (left.first(), left.last(), right.first(), right.last()) {
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            left_last < right_first || right_last < left_first
        }
        _ => true,
    }
}

/// Merges two sorted slices into a new sorted, deduplicated `Vec` (union).
///
/// When an element is present in both slices the copy from `left` is kept.
pub(crate) fn merge_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());

    if ranges_disjoint(left, right) {
        let left_first = match (left.last(), right.first()) {
            (Some(left_last), Some(right_first)) => left_last < right_first,
            _ => true,
        };
        if left_first {
            result.extend_from_slice(left);
            result.extend_from_slice(right);
        } else {
            result.extend_from_slice(right);
            result.extend_from_slice(left);
        }
        return result;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Elements of `left` that are absent from `right`.
pub(crate) fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result
}

/// Elements present in both slices, cloned from `left`.
pub(crate) fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Elements present in exactly one of the two slices.
pub(crate) fn symmetric_difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return merge_slices(left, right);
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Returns `true` when every element of `left` also appears in `right`.
pub(crate) fn is_subset_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() > right.len() {
        return false;
    }

    let mut right_index = 0;
    for element in left {
        while right_index < right.len() && right[right_index] < *element {
            right_index += 1;
        }
        if right_index == right.len() || right[right_index] != *element {
            return false;
        }
        right_index += 1;
    }
    true
}

/// Returns `true` when the two slices share at least one element.
pub(crate) fn overlaps_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if ranges_disjoint(left, right) {
        return false;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => return true,
        }
    }
    false
}

/// Builds a membership predicate for `other` that must be queried in
/// ascending order.
///
/// The returned closure keeps a cursor into `other` and only ever moves it
/// forward, so probing every element of another sorted slice costs
/// O(n + m) in total. This is what lets in-place intersection and
/// difference run through `retain` without cloning.
pub(crate) fn membership_cursor<T: Ord>(other: &[T]) -> impl FnMut(&T) -> bool + '_ {
    let mut cursor = 0;
    move |element: &T| {
        while cursor < other.len() && other[cursor] < *element {
            cursor += 1;
        }
        cursor < other.len() && other[cursor] == *element
    }
}

#[cfg(debug_assertions)]
#[inline]
pub(crate) fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}
