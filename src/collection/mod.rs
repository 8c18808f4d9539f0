//! Ordered and keyed collections.
//!
//! - [`SortedSet`]: unique elements in ascending order, with in-place set
//!   algebra (union, intersection, difference, symmetric difference)
//! - [`Dictionary`]: key/value pairs that iterate in insertion order
//!
//! # Examples
//!
//! ## `SortedSet`
//!
//! ```rust
//! use setwise::sorted_set;
//!
//! let left = sorted_set![0, 2, 4, 5, 6, 8, 10];
//! let right = sorted_set![5, 6, 7, 8, 9, 10];
//!
//! assert_eq!((&left | &right).to_vec(), vec![0, 2, 4, 5, 6, 7, 8, 9, 10]);
//! assert_eq!((&left & &right).to_vec(), vec![5, 6, 8, 10]);
//! assert_eq!((&left - &right).to_vec(), vec![0, 2, 4]);
//! ```
//!
//! ## `Dictionary`
//!
//! ```rust
//! use setwise::collection::Dictionary;
//!
//! let mut cookies = Dictionary::new();
//! cookies.insert("user", "Maria");
//! cookies.insert("phone", "12345667789");
//!
//! let keys: Vec<&&str> = cookies.keys().collect();
//! assert_eq!(keys, vec![&"user", &"phone"]);
//! ```

mod dictionary;
mod sorted_set;
mod sorted_set_macro;

pub use dictionary::Dictionary;
pub use dictionary::DictionaryIterator;
pub use sorted_set::SortedSet;
pub use sorted_set::SortedSetIntoIterator;
pub use sorted_set::SortedSetIterator;

#[cfg(feature = "ahash")]
pub use dictionary::AHashDictionary;
#[cfg(feature = "fxhash")]
pub use dictionary::FxDictionary;
