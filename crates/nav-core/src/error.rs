//! Base error type.
//!
//! Sub-crates define their own error enums (`NetworkError`, `RouteError`,
//! `OutputError`); `NavError` covers what lives in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
