//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SpotHubError`] via `#[from]`.

use std::error::Error;

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum SpotHubError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// A value supplied at the boundary could not be turned into a typed field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid boolean value for {field}: {value:?}")]
    InvalidBoolean { field: &'static str, value: String },
}
