//! Error type shared by the HTTP client and its callers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The request never produced a response (network failure, CORS, no
    /// transport on this target).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request handle was aborted before a response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status carried by the error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
