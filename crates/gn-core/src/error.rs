//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a
//! core operation can fail inside them.

use thiserror::Error;

/// The error type for `gn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `gn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
