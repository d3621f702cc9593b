//! Error types for the todo fetch.
//!
//! # Design
//! Each failure mode of a fetch maps to one variant with a fixed,
//! human-readable message that hosts can show as-is. The variants are checked
//! in a fixed order: transport, status, missing body, decode. Only the first
//! failure is ever reported.

use thiserror::Error;

/// Errors delivered to a fetch completion.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status outside 200..=299.
    #[error("The URL Response was unsuccessful.")]
    RequestFailed { status: u16 },

    /// The status was successful but the body was absent or empty.
    #[error("No data was returned.")]
    NoData,

    /// The body did not decode into a `Todo`.
    #[error("Unable to decode the JSON response.")]
    Decode(#[source] serde_json::Error),

    /// The session produced no response at all.
    #[error("The request could not be completed: {0}")]
    Transport(#[from] TransportError),
}

impl FetchError {
    /// HTTP status associated with the error, when the server sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// A failure below HTTP: connection refused, DNS, TLS, or a body that could
/// not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            FetchError::RequestFailed { status: 400 }.to_string(),
            "The URL Response was unsuccessful."
        );
        assert_eq!(FetchError::NoData.to_string(), "No data was returned.");

        let json_err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        assert_eq!(
            FetchError::Decode(json_err).to_string(),
            "Unable to decode the JSON response."
        );
    }

    #[test]
    fn transport_error_carries_reason() {
        let err = FetchError::from(TransportError::new("connection refused"));
        assert_eq!(
            err.to_string(),
            "The request could not be completed: connection refused"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn decode_error_exposes_source() {
        use std::error::Error as _;
        let json_err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        assert!(FetchError::Decode(json_err).source().is_some());
    }
}
