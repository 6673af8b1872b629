//! The configuration error taxonomy.
//!
//! Every error aborts the surrounding `parse()` call immediately: the first
//! sub-schema failure wins, sibling errors are not accumulated. Each variant
//! carries the fully scoped key so the message localizes the offending option
//! without further context.

use core::fmt;

use crate::node::Node;

/// A user-facing configuration validation error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required option is absent from the input document.
    MissingOption {
        /// The scoped key of the absent option.
        key: String,
    },

    /// An option is present but its value fails a leaf's validator.
    UnexpectedValue {
        /// The scoped key of the offending option.
        key: String,
        /// The node the document actually supplied.
        actual: Node,
        /// The format hint the leaf expected.
        expected: &'static str,
    },

    /// An option's value parses correctly but is outside the closed set an
    /// enumerated entry permits.
    EnumUnexpectedValue {
        /// The scoped key of the offending option.
        key: String,
        /// The parsed value, rendered for display.
        actual: String,
        /// The permitted values, in declared order.
        allowed: Vec<String>,
    },
}

impl ConfigError {
    /// Returns a stable machine-readable code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingOption { .. } => "config::missing_option",
            ConfigError::UnexpectedValue { .. } => "config::unexpected_value",
            ConfigError::EnumUnexpectedValue { .. } => "config::enum_unexpected_value",
        }
    }

    /// The fully scoped key of the option this error localizes.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingOption { key }
            | ConfigError::UnexpectedValue { key, .. }
            | ConfigError::EnumUnexpectedValue { key, .. } => key,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingOption { key } => {
                write!(f, "missing required option `{key}`")
            }
            ConfigError::UnexpectedValue {
                key,
                actual,
                expected,
            } => {
                write!(
                    f,
                    "option `{key}` has unexpected value `{actual}`, expected {expected}"
                )
            }
            ConfigError::EnumUnexpectedValue {
                key,
                actual,
                allowed,
            } => {
                write!(
                    f,
                    "option `{key}` has value `{actual}` but must be one of `{}`",
                    allowed.join("|")
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
