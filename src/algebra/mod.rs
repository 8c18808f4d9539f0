//! In-place set algebra.
//!
//! [`SetAlgebra`] names the mutating set operations so the same calling code
//! can drive a [`SortedSet`](crate::collection::SortedSet), a
//! [`BTreeSet`] or a [`HashSet`]. Every operation is total: there is no
//! failure mode, and the empty set behaves as the usual identity or
//! absorbing element.
//!
//! | Operation                | Result                          |
//! |--------------------------|---------------------------------|
//! | `union_with`             | self ∪ other                    |
//! | `intersect_with`         | self ∩ other                    |
//! | `except_with`            | self ∖ other                    |
//! | `symmetric_except_with`  | (self ∖ other) ∪ (other ∖ self) |
//!
//! # Examples
//!
//! ```rust
//! use setwise::algebra::SetAlgebra;
//! use std::collections::BTreeSet;
//!
//! fn shared<S: SetAlgebra + Clone>(left: &S, right: &S) -> S {
//!     let mut result = left.clone();
//!     result.intersect_with(right);
//!     result
//! }
//!
//! let left: BTreeSet<i32> = [0, 2, 4, 5, 6, 8, 10].into_iter().collect();
//! let right: BTreeSet<i32> = [5, 6, 7, 8, 9, 10].into_iter().collect();
//! let common: Vec<i32> = shared(&left, &right).into_iter().collect();
//! assert_eq!(common, vec![5, 6, 8, 10]);
//! ```

pub(crate) mod merge;

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Mutating set operations shared by the set types this crate works with.
///
/// Implementors keep their own invariants (ordering, hashing) intact; the
/// trait only fixes the meaning of each operation.
pub trait SetAlgebra<Rhs: ?Sized = Self> {
    /// Adds every element of `other` to `self`.
    fn union_with(&mut self, other: &Rhs);

    /// Keeps only the elements of `self` that also appear in `other`.
    fn intersect_with(&mut self, other: &Rhs);

    /// Removes every element of `other` from `self`.
    fn except_with(&mut self, other: &Rhs);

    /// Keeps the elements present in exactly one of `self` and `other`.
    fn symmetric_except_with(&mut self, other: &Rhs);

    /// Returns `true` when every element of `self` appears in `other`.
    fn is_subset_of(&self, other: &Rhs) -> bool;

    /// Returns `true` when every element of `other` appears in `self`.
    fn is_superset_of(&self, other: &Rhs) -> bool;

    /// Returns `true` when `self` and `other` share at least one element.
    fn overlaps(&self, other: &Rhs) -> bool;
}

impl<T: Clone + Ord> SetAlgebra for BTreeSet<T> {
    fn union_with(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }

    fn intersect_with(&mut self, other: &Self) {
        self.retain(|element| other.contains(element));
    }

    fn except_with(&mut self, other: &Self) {
        self.retain(|element| !other.contains(element));
    }

    fn symmetric_except_with(&mut self, other: &Self) {
        for element in other {
            if !self.remove(element) {
                self.insert(element.clone());
            }
        }
    }

    fn is_subset_of(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn is_superset_of(&self, other: &Self) -> bool {
        self.is_superset(other)
    }

    fn overlaps(&self, other: &Self) -> bool {
        !self.is_disjoint(other)
    }
}

impl<T, S> SetAlgebra for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn union_with(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }

    fn intersect_with(&mut self, other: &Self) {
        self.retain(|element| other.contains(element));
    }

    fn except_with(&mut self, other: &Self) {
        self.retain(|element| !other.contains(element));
    }

    fn symmetric_except_with(&mut self, other: &Self) {
        for element in other {
            if !self.remove(element) {
                self.insert(element.clone());
            }
        }
    }

    fn is_subset_of(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn is_superset_of(&self, other: &Self) -> bool {
        self.is_superset(other)
    }

    fn overlaps(&self, other: &Self) -> bool {
        !self.is_disjoint(other)
    }
}
