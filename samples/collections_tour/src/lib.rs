//! # Collections Tour
//!
//! A sample application that walks through the collection types of setwise.
//!
//! ## Module Structure
//!
//! - `config`: Command-line and environment configuration
//! - `tour`: The three exercises (sorted sets, dictionary, products)

#![forbid(unsafe_code)]

pub mod config;
pub mod tour;
