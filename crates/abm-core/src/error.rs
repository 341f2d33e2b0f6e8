//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `abm-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("property `{0}` is not set")]
    MissingProperty(String),

    #[error("property `{key}` does not hold a value of type {expected}")]
    PropertyType {
        key:      String,
        expected: &'static str,
    },
}

/// Shorthand result type for `abm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
