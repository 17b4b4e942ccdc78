//! Base error type.
//!
//! Sub-crates define their own error enums; `GsError` covers the failures
//! that belong to the core types themselves (configuration and parsing).

use thiserror::Error;

/// The top-level error type for `gs-core`.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `gs-core`.
pub type GsResult<T> = Result<T, GsError>;
