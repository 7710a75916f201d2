//! Formatter error types.

use std::fmt;

/// Errors raised at the formatter's dynamic boundaries.
///
/// Failures inside caller-supplied colorizers or templates are not wrapped;
/// they propagate to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A strategy tag from external configuration matched none of the
    /// recognized values. Carries the offending tag.
    UnknownStrategy(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownStrategy(tag) => {
                write!(f, "unknown message construction strategy: {tag}")
            }
        }
    }
}

impl std::error::Error for FormatError {}
