//! Error types for Gatehouse Core.

use thiserror::Error;

/// Core errors that can occur while resolving role patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("missing role parameter `{name}` for role pattern `{pattern}`")]
    MissingRoleParameter { name: String, pattern: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
