//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `RtError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `rt-core`.
#[derive(Debug, Error)]
pub enum RtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `rt-core`.
pub type RtResult<T> = Result<T, RtError>;
