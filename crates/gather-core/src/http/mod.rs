//! HTTP client wrapper over the backend REST API

mod client;

pub use client::HttpClient;

use thiserror::Error;

/// Errors from the HTTP layer.
///
/// The wrapper classifies and notifies, then always re-raises; it never
/// swallows a failure.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {message}")]
    Transport { message: String },
    #[error("HTTP status {status}")]
    Status { status: u16 },
    #[error("decode error: {message}")]
    Decode { message: String },
}

impl HttpError {
    /// The HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
