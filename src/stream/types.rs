//! Stream errors

use thiserror::Error;

/// Why a snapshot subscription ended
///
/// Every variant is terminal for the subscription that produced it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    /// Configured server address could not be parsed
    #[error("invalid server address: {0}")]
    InvalidAddress(String),

    /// Connection could not be established or was severed
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered the call with a non-OK status
    #[error("status: {code}, message: {message:?}")]
    Status { code: tonic::Code, message: String },

    /// Server ended the stream without an error
    #[error("stream closed by server")]
    Closed,
}

impl From<tonic::Status> for StreamError {
    fn from(status: tonic::Status) -> Self {
        StreamError::Status {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

impl From<tonic::transport::Error> for StreamError {
    fn from(err: tonic::transport::Error) -> Self {
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        StreamError::Transport(detail)
    }
}
