//! Error types for the lithology parsing service.
//!
//! This module defines the central `Error` enum shared by the server, the
//! client and parsing delegates. It implements `From<Error>` for
//! `tonic::Status` so handler failures propagate to clients with appropriate
//! status codes, and `From<Status>` so the client can report what the server
//! sent back.
//!
//! ## Error Cases
//! - `PropertyExtraction`: the delegate could not extract moisture or
//!   consistency from the description.
//! - `TermExtraction`: the delegate could not extract the soil term list.
//! - `Transport`: the client could not reach the server.
//! - `Rpc`: the server answered with a non-OK status.

use tonic::{Code, Status};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the lithology parsing service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Structured-property extraction failed for the given description.
    #[error("Property extraction error: {reason}")]
    PropertyExtraction { reason: String },

    /// Soil-term extraction failed for the given description.
    #[error("Term extraction error: {reason}")]
    TermExtraction { reason: String },

    /// Connecting to the server failed.
    #[error("Transport error: {context}")]
    Transport { context: String },

    /// The server returned a non-OK status.
    #[error("RPC error ({code:?}): {message}")]
    Rpc { code: Code, message: String },
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::PropertyExtraction { reason } => {
                Status::invalid_argument(format!("Property extraction error: {}", reason))
            }
            Error::TermExtraction { reason } => {
                Status::internal(format!("Term extraction error: {}", reason))
            }
            Error::Transport { context } => Status::unavailable(context),
            Error::Rpc { code, message } => Status::new(code, message),
        }
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Rpc {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

impl From<tonic::transport::Error> for Error {
    fn from(err: tonic::transport::Error) -> Self {
        Error::Transport {
            context: err.to_string(),
        }
    }
}
