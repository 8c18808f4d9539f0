//! # setwise
//!
//! Ordered sets with in-place set algebra, plus the small collection types
//! that usually travel with them.
//!
//! ## Overview
//!
//! - **Ordered sets**: [`SortedSet`](collection::SortedSet) keeps unique
//!   elements in ascending order and supports union, intersection,
//!   difference and symmetric difference in place
//! - **Set algebra**: the [`SetAlgebra`](algebra::SetAlgebra) trait drives
//!   `SortedSet`, `BTreeSet` and `HashSet` through the same operations
//! - **Dictionary**: [`Dictionary`](collection::Dictionary), an
//!   insertion-ordered key/value map with a "missing key" error
//! - **Value objects**: [`Product`](value::Product), structural equality
//!   with a consistent hash
//! - **Display**: [`format_collection`](display::format_collection) and
//!   friends for dumping a collection to the console
//!
//! ## Feature Flags
//!
//! - `collection`: `SortedSet`, `Dictionary` and `SetAlgebra` (default)
//! - `value`: value objects (default)
//! - `serde`: `Serialize`/`Deserialize` for every collection and value
//! - `rayon`: `SortedSet::par_iter`
//! - `fxhash`: `FxDictionary`, a dictionary hashed with `rustc-hash`
//! - `ahash`: `AHashDictionary`, a dictionary hashed with `ahash`
//! - `full`: `collection`, `value` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut evens = sorted_set![0, 2, 4, 5, 6, 8, 10];
//! let upper = sorted_set![5, 6, 7, 8, 9, 10];
//!
//! evens.except_with(&upper);
//! assert_eq!(format_collection(&evens, CollectionLayout::Spaces), "0 2 4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::algebra::SetAlgebra;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::sorted_set;

    #[cfg(feature = "value")]
    pub use crate::value::*;

    pub use crate::display::{CollectionLayout, format_collection, write_collection};
    pub use crate::error::CollectionError;
}

#[cfg(feature = "collection")]
pub mod algebra;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "value")]
pub mod value;

pub mod display;

mod error;

pub use error::CollectionError;
