//! Value objects.
//!
//! A value object has no identity of its own: two instances are the same
//! value when all of their fields are equal, and they hash accordingly. That
//! makes them safe to use as elements of a [`HashSet`](std::collections::HashSet)
//! or a [`SortedSet`](crate::collection::SortedSet).

mod product;

pub use product::Product;
