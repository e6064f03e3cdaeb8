//! Errors reported by the generators.
//!
//! Only arguments that can never produce a meaningful value are rejected. Degenerate but
//! interpretable inputs (an inverted date range, an empty list to choose from) are answered with a
//! fallback value instead.

use thiserror::Error;

/// Invalid-argument conditions signaled by a [`Randomizer`](crate::Randomizer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested enumeration declares no members to choose from.
    #[error("enumeration {type_name} has no members")]
    EmptyEnumeration {
        /// Name of the offending type.
        type_name: &'static str,
    },

    /// A string was requested from a character source that is empty or only whitespace.
    #[error("invalid character source {0:?}: must contain at least one non-whitespace character")]
    InvalidCharacterSource(String),
}

/// Result type for fallible generators.
pub type Result<T> = std::result::Result<T, Error>;
