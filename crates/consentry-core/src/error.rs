//! Error types for Consentry.
//!
//! The consent path itself never surfaces errors (a malformed record
//! degrades to "no consent stored", a failed write is logged and
//! swallowed). This type covers the host-integration surface, where a
//! typed failure is wanted: loading widget configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
