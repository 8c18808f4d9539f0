//! Console rendering of collection contents.
//!
//! The dump is meant for people reading a terminal, not for machines: each
//! element is rendered with its [`Display`](fmt::Display) implementation,
//! either space-separated on one line or one per line.
//!
//! # Examples
//!
//! ```rust
//! use setwise::display::{CollectionLayout, format_collection};
//!
//! let numbers = [0, 2, 4];
//! assert_eq!(format_collection(&numbers, CollectionLayout::Spaces), "0 2 4");
//! assert_eq!(format_collection(&numbers, CollectionLayout::Lines), "0\n2\n4");
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// How a collection dump separates its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollectionLayout {
    /// All elements on one line, separated by single spaces.
    #[default]
    Spaces,
    /// One element per line.
    Lines,
}

impl CollectionLayout {
    const fn separator(self) -> &'static str {
        match self {
            Self::Spaces => " ",
            Self::Lines => "\n",
        }
    }
}

impl fmt::Display for CollectionLayout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces => formatter.write_str("spaces"),
            Self::Lines => formatter.write_str("lines"),
        }
    }
}

/// Error returned when parsing an unknown layout name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection layout `{0}` (expected `spaces` or `lines`)")]
pub struct ParseLayoutError(String);

impl FromStr for CollectionLayout {
    type Err = ParseLayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "spaces" | "space" => Ok(Self::Spaces),
            "lines" | "line" => Ok(Self::Lines),
            _ => Err(ParseLayoutError(text.to_string())),
        }
    }
}

/// Renders every item of `items` using `layout`.
///
/// There is no trailing separator; an empty collection renders as an empty
/// string.
pub fn format_collection<I>(items: I, layout: CollectionLayout) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut rendered = String::new();
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            rendered.push_str(layout.separator());
        }
        // Writing into a String cannot fail.
        let _ = fmt::Write::write_fmt(&mut rendered, format_args!("{item}"));
    }
    rendered
}

/// Writes the dump of `items` to `writer`, followed by a newline.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_collection<W, I>(writer: &mut W, items: I, layout: CollectionLayout) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    writeln!(writer, "{}", format_collection(items, layout))
}
