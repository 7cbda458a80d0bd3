//! Error types for the payments client.
//!
//! Failures are modeled as a closed sum type so callers can discriminate by
//! kind: errors the remote service reported ([`Error::Api`]), non-success
//! responses that could not be interpreted ([`Error::Unknown`]), success
//! responses that did not match the expected shape ([`Error::Decode`]), and
//! failures that happened before a response was obtained
//! ([`Error::Transport`]).

use std::fmt;

use serde::Deserialize;

use crate::transport::TransportError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by client operations.
///
/// Nothing is handled or retried inside the client; every failure is
/// returned to the caller verbatim. No variant carries credential material.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service explicitly reported a failure for the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Non-success status whose error envelope could not be parsed.
    ///
    /// Carries the raw response body as text when it was decodable.
    #[error("unknown_error: {}", message.as_deref().unwrap_or("(body not decodable as text)"))]
    Unknown {
        /// The raw response body, if it was valid UTF-8.
        message: Option<String>,
    },

    /// Success status whose body could not be decoded into the expected type.
    ///
    /// This signals a contract mismatch between client and service, not a
    /// business failure, and is never conflated with [`Error::Api`].
    #[error("failed to decode response body: {source} (body: {body})")]
    Decode {
        /// The raw response body as text.
        body: String,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns the service-reported error, if that is what this is.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the failure happened before a response was obtained.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Structured error envelope returned by the payments service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Broad error category, e.g. `card_error` or `invalid_request_error`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Machine-readable error code, e.g. `insufficient_funds`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Link to the service documentation for this error.
    #[serde(default)]
    pub doc_url: Option<String>,
    /// The request parameter the error relates to.
    #[serde(default)]
    pub param: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payments api error: {}", self.error_type)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(param) = &self.param {
            write!(f, " [param: {param}]")?;
        }
        if let Some(doc_url) = &self.doc_url {
            write!(f, " (see {doc_url})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
