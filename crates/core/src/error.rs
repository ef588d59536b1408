//! Error types shared by the cutlist crates.

use thiserror::Error;

/// Errors raised while validating cutlist inputs.
///
/// Degenerate geometry (a part that cannot fit its sheet) is deliberately not
/// an error; it is reported through [`crate::Diagnostic`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A stock sheet has an empty name or a non-positive dimension.
    #[error("invalid stock sheet: {0}")]
    InvalidStock(String),

    /// A part has a non-positive dimension or a zero quantity.
    #[error("invalid part: {0}")]
    InvalidPart(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No stock sheet matched a lookup.
    #[error("stock sheet not found: {0}")]
    StockNotFound(String),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
