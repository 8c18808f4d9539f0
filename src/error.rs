//! Error types for keyed collection access.
//!
//! Set operations are total and never fail. The only fallible operation in
//! the crate is reading a key that a [`Dictionary`](crate::collection::Dictionary)
//! does not hold.

use thiserror::Error;

/// Represents errors that can occur when reading from a collection.
///
/// # Examples
///
/// ```rust
/// use setwise::CollectionError;
///
/// let error = CollectionError::key_not_found(&"user");
/// assert_eq!(
///     error.to_string(),
///     "the given key \"user\" was not present in the dictionary"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A key was read that the collection does not contain.
    #[error("the given key {key} was not present in the dictionary")]
    KeyNotFound {
        /// The `Debug` rendering of the missing key.
        key: String,
    },
}

impl CollectionError {
    /// Creates a [`CollectionError::KeyNotFound`] for the given key.
    #[must_use]
    pub fn key_not_found<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }
}
