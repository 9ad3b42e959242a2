//! Error types for sheet extraction.

use thiserror::Error;

/// Errors produced while reducing a worksheet to its output form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Two header cells reduced to the same output column name.
    #[error("duplicate header name '{name}'")]
    DuplicateHeader { name: String },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
