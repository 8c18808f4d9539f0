//! Ordered set with in-place set algebra.
//!
//! This module provides [`SortedSet`], a collection of unique elements that
//! always iterates in ascending order and supports union, intersection,
//! difference and symmetric difference against another set.
//!
//! # Overview
//!
//! Elements are stored in a sorted, deduplicated `SmallVec`. Sets of up to
//! eight elements live inline without a heap allocation; larger sets spill
//! to the heap transparently.
//!
//! # Time Complexity
//!
//! | Operation                | Complexity |
//! |--------------------------|------------|
//! | `contains`               | O(log n)   |
//! | `insert`                 | O(n)       |
//! | `remove`                 | O(n)       |
//! | `first` / `last`         | O(1)       |
//! | `iter`                   | O(1) + O(n)|
//! | `range`                  | O(log n)   |
//! | `union_with`             | O(n + m)   |
//! | `intersect_with`         | O(n + m)   |
//! | `except_with`            | O(n + m)   |
//! | `symmetric_except_with`  | O(n + m)   |
//!
//! Binary operations walk both sorted sequences once. When the value ranges
//! of the two sets do not overlap, no element comparison is performed.
//!
//! # Examples
//!
//! ```rust
//! use setwise::collection::SortedSet;
//!
//! let left: SortedSet<i32> = [0, 2, 4, 5, 6, 8, 10].into();
//! let right: SortedSet<i32> = [5, 6, 7, 8, 9, 10].into();
//!
//! let mut union = left.clone();
//! union.union_with(&right);
//! assert_eq!(union.to_vec(), vec![0, 2, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let mut intersection = left.clone();
//! intersection.intersect_with(&right);
//! assert_eq!(intersection.to_vec(), vec![5, 6, 8, 10]);
//!
//! let mut difference = left.clone();
//! difference.except_with(&right);
//! assert_eq!(difference.to_vec(), vec![0, 2, 4]);
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Bound, RangeBounds, Sub,
    SubAssign,
};

use crate::algebra::SetAlgebra;
use crate::algebra::merge::{
    difference_slices, intersection_slices, is_subset_slices, membership_cursor, merge_slices,
    overlaps_slices, ranges_disjoint, symmetric_difference_slices,
};

/// Number of elements stored inline before the set spills to the heap.
const INLINE_CAPACITY: usize = 8;

type Storage<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// A set of unique elements kept in ascending order.
///
/// Duplicates (by `Ord` equality) are collapsed on construction and ignored
/// on insertion; the first copy seen is the one kept. Every traversal of the
/// set, whether through [`iter`](Self::iter), [`range`](Self::range) or
/// `IntoIterator`, yields elements in strictly ascending order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord` for almost every operation.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::SortedSet;
///
/// let mut names: SortedSet<&str> = ["Thiago", "Dineia", "Bento"].into();
/// assert!(!names.insert("Bento"));
///
/// let sorted: Vec<&str> = names.iter().copied().collect();
/// assert_eq!(sorted, vec!["Bento", "Dineia", "Thiago"]);
/// ```
#[derive(Clone)]
pub struct SortedSet<T> {
    elements: Storage<T>,
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync);

impl<T> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element from the set.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the smallest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let set: SortedSet<i32> = [4, 1, 3].into();
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(set.last(), Some(&4));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as an ascending slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Each call starts a fresh traversal; the iterator is double-ended, so
    /// `iter().rev()` walks the set in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let set: SortedSet<i32> = [3, 1, 2].into();
    /// let ascending: Vec<&i32> = set.iter().collect();
    /// let descending: Vec<&i32> = set.iter().rev().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    /// assert_eq!(descending, vec![&3, &2, &1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Returns the number of elements removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = (1..=10).collect();
    /// let removed = set.retain(|element| element % 2 == 0);
    /// assert_eq!(removed, 5);
    /// assert_eq!(set.to_vec(), vec![2, 4, 6, 8, 10]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|element| predicate(&*element));
        before - self.elements.len()
    }

    /// Returns the elements as an ascending `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.to_vec()
    }

    /// Consumes the set, returning its elements as an ascending `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }

    /// Returns a parallel iterator over the elements.
    ///
    /// Ordering is preserved by order-aware consumers such as `collect`.
    #[cfg(feature = "rayon")]
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T>
    where
        T: Sync,
    {
        use rayon::prelude::*;
        self.as_slice().par_iter()
    }
}

impl<T: Ord> SortedSet<T> {
    /// Creates a set from a vector that is already sorted and deduplicated.
    ///
    /// The input is checked with `debug_assert!`; in release builds unsorted
    /// input produces a set that violates its ordering invariant.
    #[must_use]
    pub fn from_sorted_vec(vec: Vec<T>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            crate::algebra::merge::is_strictly_sorted(&vec),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self {
            elements: SmallVec::from_vec(vec),
        }
    }

    fn position<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|item| Borrow::<Q>::borrow(item).cmp(element))
    }

    /// Returns `true` if the set contains the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let names: SortedSet<String> = ["Maria".to_string()].into();
    /// assert!(names.contains("Maria"));
    /// assert!(!names.contains("Alex"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(element).is_ok()
    }

    /// Returns a reference to the stored element equal to `element`.
    pub fn get<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(element)
            .ok()
            .map(|index| &self.elements[index])
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was added, `false` if an equal element
    /// was already present. A rejected duplicate leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// assert!(set.insert(2));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.position(&element) {
            Ok(_) => false,
            Err(index) => {
                self.elements.insert(index, element);
                true
            }
        }
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes and returns the stored element equal to `element`.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(element)
            .ok()
            .map(|index| self.elements.remove(index))
    }

    /// Returns an ascending iterator over the elements within `range`.
    ///
    /// An empty or inverted range yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let set: SortedSet<i32> = [0, 2, 4, 5, 6, 8, 10].into();
    /// let view: Vec<&i32> = set.range(4..=8).collect();
    /// assert_eq!(view, vec![&4, &5, &6, &8]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> SortedSetIterator<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(bound) => self
                .elements
                .partition_point(|element| Borrow::<Q>::borrow(element) < bound),
            Bound::Excluded(bound) => self
                .elements
                .partition_point(|element| Borrow::<Q>::borrow(element) <= bound),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(bound) => self
                .elements
                .partition_point(|element| Borrow::<Q>::borrow(element) <= bound),
            Bound::Excluded(bound) => self
                .elements
                .partition_point(|element| Borrow::<Q>::borrow(element) < bound),
            Bound::Unbounded => self.elements.len(),
        };
        SortedSetIterator {
            inner: self.elements[start..end.max(start)].iter(),
        }
    }

    /// Makes `self` the union of `self` and `other`.
    ///
    /// Elements already in `self` are kept as they are; elements only in
    /// `other` are cloned in.
    pub fn union_with(&mut self, other: &Self)
    where
        T: Clone,
    {
        let before = self.len();
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.elements.clone_from(&other.elements);
        } else {
            self.elements = SmallVec::from_vec(merge_slices(&self.elements, &other.elements));
        }
        tracing::trace!(operation = "union_with", before, after = self.len());
    }

    /// Keeps only the elements of `self` that are also in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        let before = self.len();
        if ranges_disjoint(&self.elements, &other.elements) {
            self.elements.clear();
        } else {
            let mut is_member = membership_cursor(&other.elements);
            self.elements.retain(|element| is_member(&*element));
        }
        tracing::trace!(operation = "intersect_with", before, after = self.len());
    }

    /// Removes every element of `other` from `self`.
    pub fn except_with(&mut self, other: &Self) {
        let before = self.len();
        if !ranges_disjoint(&self.elements, &other.elements) {
            let mut is_member = membership_cursor(&other.elements);
            self.elements.retain(|element| !is_member(&*element));
        }
        tracing::trace!(operation = "except_with", before, after = self.len());
    }

    /// Keeps the elements that are in exactly one of `self` and `other`.
    pub fn symmetric_except_with(&mut self, other: &Self)
    where
        T: Clone,
    {
        let before = self.len();
        if other.is_empty() {
            return;
        }
        self.elements = SmallVec::from_vec(symmetric_difference_slices(
            &self.elements,
            &other.elements,
        ));
        tracing::trace!(operation = "symmetric_except_with", before, after = self.len());
    }

    /// Returns a new set holding the union of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_sorted_vec(merge_slices(&self.elements, &other.elements))
    }

    /// Returns a new set holding the elements common to `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_sorted_vec(intersection_slices(&self.elements, &other.elements))
    }

    /// Returns a new set holding the elements of `self` absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_sorted_vec(difference_slices(&self.elements, &other.elements))
    }

    /// Returns a new set holding the elements in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_sorted_vec(symmetric_difference_slices(
            &self.elements,
            &other.elements,
        ))
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// The empty set is a subset of every set.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        is_subset_slices(&self.elements, &other.elements)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Returns `true` if `self` is a subset of `other` and smaller than it.
    #[must_use]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Returns `true` if `self` is a superset of `other` and larger than it.
    #[must_use]
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        other.is_proper_subset_of(self)
    }

    /// Returns `true` if `self` and `other` share at least one element.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps_slices(&self.elements, &other.elements)
    }

    /// Returns `true` if `self` holds exactly the distinct elements of `other`.
    ///
    /// `other` may contain duplicates and come in any order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::SortedSet;
    ///
    /// let set: SortedSet<i32> = [1, 2, 3].into();
    /// assert!(set.set_equals(&[3, 1, 2, 2]));
    /// assert!(!set.set_equals(&[1, 2]));
    /// ```
    pub fn set_equals<'a, I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let other: SortedSet<&T> = other.into_iter().collect();
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left == *right)
    }
}

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        elements.sort();
        elements.dedup();
        Self::from_sorted_vec(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    /// Inserts every element of `iter`; existing elements win over equal
    /// incoming ones.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.elements.len();
        self.elements.extend(iter);
        if self.elements.len() == before {
            return;
        }
        self.elements.sort();
        self.elements.dedup();
    }
}

impl<T: Ord + Clone> SetAlgebra for SortedSet<T> {
    fn union_with(&mut self, other: &Self) {
        Self::union_with(self, other);
    }

    fn intersect_with(&mut self, other: &Self) {
        Self::intersect_with(self, other);
    }

    fn except_with(&mut self, other: &Self) {
        Self::except_with(self, other);
    }

    fn symmetric_except_with(&mut self, other: &Self) {
        Self::symmetric_except_with(self, other);
    }

    fn is_subset_of(&self, other: &Self) -> bool {
        Self::is_subset_of(self, other)
    }

    fn is_superset_of(&self, other: &Self) -> bool {
        Self::is_superset_of(self, other)
    }

    fn overlaps(&self, other: &Self) -> bool {
        Self::overlaps(self, other)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Ord + Clone> BitOr for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitor(self, other: Self) -> SortedSet<T> {
        self.union(other)
    }
}

impl<T: Ord + Clone> BitAnd for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitand(self, other: Self) -> SortedSet<T> {
        self.intersection(other)
    }
}

impl<T: Ord + Clone> Sub for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn sub(self, other: Self) -> SortedSet<T> {
        self.difference(other)
    }
}

impl<T: Ord + Clone> BitXor for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitxor(self, other: Self) -> SortedSet<T> {
        self.symmetric_difference(other)
    }
}

impl<T: Ord + Clone> BitOrAssign<&SortedSet<T>> for SortedSet<T> {
    fn bitor_assign(&mut self, other: &SortedSet<T>) {
        self.union_with(other);
    }
}

impl<T: Ord> BitAndAssign<&SortedSet<T>> for SortedSet<T> {
    fn bitand_assign(&mut self, other: &SortedSet<T>) {
        self.intersect_with(other);
    }
}

impl<T: Ord> SubAssign<&SortedSet<T>> for SortedSet<T> {
    fn sub_assign(&mut self, other: &SortedSet<T>) {
        self.except_with(other);
    }
}

impl<T: Ord + Clone> BitXorAssign<&SortedSet<T>> for SortedSet<T> {
    fn bitxor_assign(&mut self, other: &SortedSet<T>) {
        self.symmetric_except_with(other);
    }
}

// =============================================================================
// Comparison, Hashing and Formatting
// =============================================================================

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.as_slice() == other.elements.as_slice()
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T: PartialOrd> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.elements.as_slice().partial_cmp(other.elements.as_slice())
    }
}

impl<T: Ord> Ord for SortedSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elements.as_slice().cmp(other.elements.as_slice())
    }
}

/// Hashes the length followed by every element in ascending order, so equal
/// sets hash equally regardless of how they were built.
impl<T: Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Ascending iterator over references to the elements of a [`SortedSet`].
#[derive(Clone)]
pub struct SortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedSetIterator<'_, T> {}

/// Owning ascending iterator over the elements of a [`SortedSet`].
pub struct SortedSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for SortedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIterator<T> {}

impl<T> FusedIterator for SortedSetIntoIterator<T> {}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Message for the `debug_assert!` guarding `from_sorted_vec`.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
