//! API Errors
//!
//! Failures of a single REST call. Components collapse these into one
//! user-visible message at the call site.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived with a non-2xx status
    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },
    /// Response body was not the expected JSON
    #[error("parse error: {0}")]
    Parse(String),
    /// Request body could not be encoded
    #[error("serialization error: {0}")]
    Serialize(String),
}
