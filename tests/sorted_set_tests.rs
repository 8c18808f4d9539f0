//! Unit tests for SortedSet.
//!
//! Covers construction, membership, ordering and every set-algebra
//! operation, including the empty-set edge cases.

#![cfg(feature = "collection")]

use rstest::{fixture, rstest};
use setwise::collection::SortedSet;
use setwise::sorted_set;

#[fixture]
fn left() -> SortedSet<i32> {
    sorted_set![0, 2, 4, 5, 6, 8, 10]
}

#[fixture]
fn right() -> SortedSet<i32> {
    sorted_set![5, 6, 7, 8, 9, 10]
}

// =============================================================================
// Construction and Membership
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: SortedSet<i32> = SortedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
}

#[rstest]
fn test_from_initializer_collapses_duplicates() {
    let set = sorted_set![3, 1, 3, 2, 1];
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_insert_duplicate_changes_nothing(left: SortedSet<i32>) {
    let mut set = left.clone();
    assert!(!set.insert(5));
    assert_eq!(set, left);
    assert_eq!(set.len(), 7);
}

#[rstest]
fn test_insert_keeps_ascending_order() {
    let mut set = SortedSet::new();
    for element in [9, 1, 8, 2, 7, 3, 6, 4, 5, 0] {
        assert!(set.insert(element));
    }
    assert_eq!(set.to_vec(), (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_contains(left: SortedSet<i32>) {
    assert!(left.contains(&0));
    assert!(left.contains(&10));
    assert!(!left.contains(&7));
    assert!(!left.contains(&-1));
}

#[rstest]
fn test_contains_with_borrowed_form() {
    let names: SortedSet<String> = ["Thiago", "Dineia", "Bento"]
        .into_iter()
        .map(String::from)
        .collect();
    assert!(names.contains("Bento"));
    assert!(!names.contains("Maria"));
}

#[rstest]
fn test_remove_reports_whether_removed(left: SortedSet<i32>) {
    let mut set = left;
    assert!(set.remove(&4));
    assert!(!set.remove(&4));
    assert!(!set.remove(&7));
    assert_eq!(set.to_vec(), vec![0, 2, 5, 6, 8, 10]);
}

#[rstest]
fn test_take_returns_stored_element() {
    let mut set = sorted_set!["a".to_string(), "b".to_string()];
    assert_eq!(set.take("a"), Some("a".to_string()));
    assert_eq!(set.take("a"), None);
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_first_and_last(left: SortedSet<i32>) {
    assert_eq!(left.first(), Some(&0));
    assert_eq!(left.last(), Some(&10));
}

#[rstest]
fn test_clear_empties_set(left: SortedSet<i32>) {
    let mut set = left;
    set.clear();
    assert!(set.is_empty());
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iteration_is_restartable(left: SortedSet<i32>) {
    let first_pass: Vec<&i32> = left.iter().collect();
    let second_pass: Vec<&i32> = left.iter().collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(left.iter().len(), 7);
}

#[rstest]
fn test_reverse_iteration(right: SortedSet<i32>) {
    let descending: Vec<i32> = right.iter().rev().copied().collect();
    assert_eq!(descending, vec![10, 9, 8, 7, 6, 5]);
}

#[rstest]
fn test_into_iter_yields_owned_ascending() {
    let names = sorted_set!["Thiago".to_string(), "Dineia".to_string(), "Bento".to_string()];
    let owned: Vec<String> = names.into_iter().collect();
    assert_eq!(owned, vec!["Bento", "Dineia", "Thiago"]);
}

#[rstest]
fn test_for_loop_over_reference(right: SortedSet<i32>) {
    let mut total = 0;
    for element in &right {
        total += element;
    }
    assert_eq!(total, 45);
}

// =============================================================================
// Set Algebra
// =============================================================================

#[rstest]
fn test_union_with_example(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut union = left;
    union.union_with(&right);
    assert_eq!(union.to_vec(), vec![0, 2, 4, 5, 6, 7, 8, 9, 10]);
}

#[rstest]
fn test_intersect_with_example(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut intersection = left;
    intersection.intersect_with(&right);
    assert_eq!(intersection.to_vec(), vec![5, 6, 8, 10]);
}

#[rstest]
fn test_except_with_example(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut difference = left;
    difference.except_with(&right);
    assert_eq!(difference.to_vec(), vec![0, 2, 4]);
}

#[rstest]
fn test_except_with_is_not_symmetric(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut difference = right;
    difference.except_with(&left);
    assert_eq!(difference.to_vec(), vec![7, 9]);
}

#[rstest]
fn test_symmetric_except_with_example(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut symmetric = left;
    symmetric.symmetric_except_with(&right);
    assert_eq!(symmetric.to_vec(), vec![0, 2, 4, 7, 9]);
}

#[rstest]
fn test_copy_leaves_source_untouched(left: SortedSet<i32>, right: SortedSet<i32>) {
    let source = left.clone();
    let mut copy = source.clone();
    copy.union_with(&right);
    assert_eq!(source, left);
    assert_ne!(copy, source);
}

#[rstest]
fn test_non_mutating_operations_match_in_place(left: SortedSet<i32>, right: SortedSet<i32>) {
    let mut union = left.clone();
    union.union_with(&right);
    assert_eq!(left.union(&right), union);

    let mut intersection = left.clone();
    intersection.intersect_with(&right);
    assert_eq!(left.intersection(&right), intersection);

    let mut difference = left.clone();
    difference.except_with(&right);
    assert_eq!(left.difference(&right), difference);

    let mut symmetric = left.clone();
    symmetric.symmetric_except_with(&right);
    assert_eq!(left.symmetric_difference(&right), symmetric);
}

#[rstest]
fn test_operators(left: SortedSet<i32>, right: SortedSet<i32>) {
    assert_eq!((&left | &right).to_vec(), vec![0, 2, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!((&left & &right).to_vec(), vec![5, 6, 8, 10]);
    assert_eq!((&left - &right).to_vec(), vec![0, 2, 4]);
    assert_eq!((&left ^ &right).to_vec(), vec![0, 2, 4, 7, 9]);

    let mut assigned = left.clone();
    assigned -= &right;
    assigned |= &sorted_set![1];
    assigned &= &sorted_set![1, 2, 3];
    assigned ^= &sorted_set![3];
    assert_eq!(assigned.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Empty Set Identities
// =============================================================================

#[rstest]
fn test_union_with_empty_is_identity(left: SortedSet<i32>) {
    let mut set = left.clone();
    set.union_with(&SortedSet::new());
    assert_eq!(set, left);
}

#[rstest]
fn test_intersect_with_empty_empties(left: SortedSet<i32>) {
    let mut set = left;
    set.intersect_with(&SortedSet::new());
    assert!(set.is_empty());
}

#[rstest]
fn test_except_with_empty_is_identity(left: SortedSet<i32>) {
    let mut set = left.clone();
    set.except_with(&SortedSet::new());
    assert_eq!(set, left);
}

#[rstest]
fn test_operations_on_empty_receiver(right: SortedSet<i32>) {
    let mut union: SortedSet<i32> = SortedSet::new();
    union.union_with(&right);
    assert_eq!(union, right);

    let mut intersection: SortedSet<i32> = SortedSet::new();
    intersection.intersect_with(&right);
    assert!(intersection.is_empty());

    let mut difference: SortedSet<i32> = SortedSet::new();
    difference.except_with(&right);
    assert!(difference.is_empty());
}

#[rstest]
fn test_self_operations_are_idempotent(left: SortedSet<i32>) {
    let copy = left.clone();

    let mut union = left.clone();
    union.union_with(&copy);
    assert_eq!(union, left);

    let mut intersection = left.clone();
    intersection.intersect_with(&copy);
    assert_eq!(intersection, left);

    let mut difference = left;
    difference.except_with(&copy);
    assert!(difference.is_empty());
}

// =============================================================================
// Predicates and Views
// =============================================================================

#[rstest]
fn test_subset_and_superset(left: SortedSet<i32>, right: SortedSet<i32>) {
    let common = &left & &right;
    assert!(common.is_subset_of(&left));
    assert!(common.is_subset_of(&right));
    assert!(common.is_proper_subset_of(&left));
    assert!(left.is_superset_of(&common));
    assert!(left.is_proper_superset_of(&common));
    assert!(!left.is_subset_of(&right));

    assert!(left.is_subset_of(&left));
    assert!(!left.is_proper_subset_of(&left));
    assert!(SortedSet::new().is_subset_of(&left));
}

#[rstest]
fn test_overlaps(left: SortedSet<i32>, right: SortedSet<i32>) {
    assert!(left.overlaps(&right));
    assert!(!(&left - &right).overlaps(&right));
    assert!(!left.overlaps(&SortedSet::new()));
}

#[rstest]
fn test_set_equals_ignores_order_and_duplicates(left: SortedSet<i32>) {
    assert!(left.set_equals(&[10, 8, 6, 5, 4, 2, 0, 0]));
    assert!(!left.set_equals(&[0, 2, 4]));
    assert!(SortedSet::<i32>::new().set_equals(&[]));
}

#[rstest]
fn test_range_view(left: SortedSet<i32>) {
    let view: Vec<i32> = left.range(2..8).copied().collect();
    assert_eq!(view, vec![2, 4, 5, 6]);

    let tail: Vec<i32> = left.range(6..).copied().collect();
    assert_eq!(tail, vec![6, 8, 10]);
}

#[rstest]
fn test_retain_removes_where(left: SortedSet<i32>) {
    let mut set = left;
    let removed = set.retain(|element| *element > 4);
    assert_eq!(removed, 3);
    assert_eq!(set.to_vec(), vec![5, 6, 8, 10]);
}

#[rstest]
fn test_extend_merges_and_collapses(left: SortedSet<i32>) {
    let mut set = left;
    set.extend([1, 2, 3, 11]);
    assert_eq!(set.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 8, 10, 11]);
}

#[rstest]
fn test_large_sets_behave_like_small_ones() {
    let multiples_of_three: SortedSet<i32> = (0..300).step_by(3).collect();
    let multiples_of_five: SortedSet<i32> = (0..300).step_by(5).collect();

    let common = &multiples_of_three & &multiples_of_five;
    let expected: Vec<i32> = (0..300).step_by(15).collect();
    assert_eq!(common.to_vec(), expected);

    let union = &multiples_of_three | &multiples_of_five;
    assert_eq!(union.len(), 100 + 60 - 20);
}

#[rstest]
fn test_hash_is_independent_of_construction_order() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(sorted_set![1, 2, 3]);
    assert!(seen.contains(&sorted_set![3, 2, 1]));
}
