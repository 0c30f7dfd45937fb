//! Error types for the permissions module.

use thiserror::Error;

/// Errors that can occur while evaluating or loading permissions.
///
/// A denied check is not an error; see [`crate::Evaluation::Unmatched`].
#[derive(Debug, Error)]
pub enum PermsError {
    /// A role pattern could not be resolved.
    #[error("interpolation error: {0}")]
    Interpolation(#[from] gatehouse_core::CoreError),

    /// A serialized permission definition could not be decoded.
    #[error("invalid permission definition: {0}")]
    InvalidDefinition(String),

    /// A permission definition could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
