//! Tour configuration.
//!
//! Every option is read from the command line first and from a
//! `SETWISE_*` environment variable second. Values are validated once, when
//! the raw [`Cli`] is turned into a [`TourConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use collections_tour::config::{Cli, TourConfig};
//!
//! let config = TourConfig::try_from(Cli::parse())?;
//! ```

use std::num::ParseIntError;

use clap::{Parser, ValueEnum};
use setwise::display::{CollectionLayout, ParseLayoutError};
use thiserror::Error;

const DEFAULT_LEFT: [i32; 7] = [0, 2, 4, 5, 6, 8, 10];
const DEFAULT_RIGHT: [i32; 6] = [5, 6, 7, 8, 9, 10];

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An element of `--left` or `--right` is not an integer.
    #[error("invalid element `{value}` in --{flag}")]
    InvalidElement {
        /// The flag the element was given to.
        flag: &'static str,
        /// The offending text.
        value: String,
        /// Why it did not parse.
        #[source]
        source: ParseIntError,
    },
    /// The layout name is unknown.
    #[error(transparent)]
    InvalidLayout(#[from] ParseLayoutError),
}

/// Which exercise the tour replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    /// Every exercise, in order.
    #[default]
    All,
    /// Sorted set algebra.
    Sets,
    /// The cookie dictionary session.
    Dictionary,
    /// Product value objects in a hash set.
    Products,
}

impl Section {
    /// Returns `true` when `self` selects `other`.
    pub const fn includes(self, other: Self) -> bool {
        matches!(self, Self::All) || self as u8 == other as u8
    }
}

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "collections-tour", version, about = "Replays the setwise collection exercises")]
pub struct Cli {
    /// How collection dumps separate their elements (`spaces` or `lines`).
    #[arg(long, env = "SETWISE_LAYOUT", default_value = "spaces")]
    pub layout: String,

    /// Comma-separated integers for the left-hand set.
    #[arg(long, env = "SETWISE_LEFT")]
    pub left: Option<String>,

    /// Comma-separated integers for the right-hand set.
    #[arg(long, env = "SETWISE_RIGHT")]
    pub right: Option<String>,

    /// Which exercise to run.
    #[arg(long, env = "SETWISE_SECTION", value_enum, default_value_t = Section::All)]
    pub section: Section,
}

/// Validated tour configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Layout of every collection dump.
    pub layout: CollectionLayout,
    /// Elements of the left-hand set, in the order given.
    pub left: Vec<i32>,
    /// Elements of the right-hand set, in the order given.
    pub right: Vec<i32>,
    /// Selected exercise.
    pub section: Section,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            layout: CollectionLayout::default(),
            left: DEFAULT_LEFT.to_vec(),
            right: DEFAULT_RIGHT.to_vec(),
            section: Section::default(),
        }
    }
}

impl TryFrom<Cli> for TourConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let left = match cli.left {
            Some(text) => parse_elements("left", &text)?,
            None => DEFAULT_LEFT.to_vec(),
        };
        let right = match cli.right {
            Some(text) => parse_elements("right", &text)?,
            None => DEFAULT_RIGHT.to_vec(),
        };

        Ok(Self {
            layout: cli.layout.parse()?,
            left,
            right,
            section: cli.section,
        })
    }
}

/// Parses a comma-separated list of integers.
///
/// Blank entries are skipped, so `""` is the empty set and `"1,,2,"` is
/// `[1, 2]`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidElement`] for the first entry that is not
/// an `i32`.
pub fn parse_elements(flag: &'static str, text: &str) -> Result<Vec<i32>, ConfigError> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse().map_err(|source| ConfigError::InvalidElement {
                flag,
                value: entry.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cli(arguments: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("collections-tour").chain(arguments.iter().copied()))
            .unwrap()
    }

    #[rstest]
    #[case("1,2,3", vec![1, 2, 3])]
    #[case(" 4 , -5 ", vec![4, -5])]
    #[case("", vec![])]
    #[case("1,,2,", vec![1, 2])]
    fn test_parse_elements(#[case] text: &str, #[case] expected: Vec<i32>) {
        assert_eq!(parse_elements("left", text), Ok(expected));
    }

    #[rstest]
    fn test_parse_elements_reports_flag_and_value() {
        let error = parse_elements("right", "1,two").unwrap_err();
        assert_eq!(error.to_string(), "invalid element `two` in --right");
    }

    #[rstest]
    fn test_try_from_applies_flags() {
        let config = TourConfig::try_from(cli(&[
            "--layout", "lines", "--left", "3,1", "--right", "1", "--section", "sets",
        ]))
        .unwrap();

        assert_eq!(config.layout, CollectionLayout::Lines);
        assert_eq!(config.left, vec![3, 1]);
        assert_eq!(config.right, vec![1]);
        assert_eq!(config.section, Section::Sets);
    }

    #[rstest]
    fn test_try_from_rejects_unknown_layout() {
        let result = TourConfig::try_from(cli(&["--layout", "columns"]));
        assert!(matches!(result, Err(ConfigError::InvalidLayout(_))));
    }

    #[rstest]
    #[case(Section::All, Section::Products, true)]
    #[case(Section::Sets, Section::Sets, true)]
    #[case(Section::Sets, Section::Dictionary, false)]
    fn test_section_includes(
        #[case] selected: Section,
        #[case] other: Section,
        #[case] expected: bool,
    ) {
        assert_eq!(selected.includes(other), expected);
    }
}
