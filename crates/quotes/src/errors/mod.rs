//! Error types and retry classification for quote queries.
//!
//! This module provides:
//! - [`QueryError`]: The error enum for every fallible operation in the crate
//! - [`RetryClass`]: Classification callers can use to drive their own retry policy

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while building, executing or decoding a quote query.
///
/// Validation failures are raised at the point the malformed input is first
/// seen. A lookup miss (unknown tag, field absent from a result) is never an
/// error; those operations return `Option`.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Malformed key material, raised when credentials are constructed.
    #[error("{name} is invalid: {reason}")]
    InvalidCredential {
        /// Which credential failed (e.g. "consumer_key")
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Malformed symbol, option descriptor, or expired option.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A required collection argument was absent.
    #[error("Required argument is missing: {0}")]
    NullArgument(&'static str),

    /// A generic operation call was given unusable arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The response body could not be parsed or lacks `response.quotes.quote`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The API answered at the transport level but encoded an application error.
    #[error("{name}: {description}")]
    RemoteQueryError {
        /// Error name reported by the API
        name: String,
        /// Error description reported by the API
        description: String,
    },

    /// The request signer refused to sign the request.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The API rejected the request with HTTP 429.
    #[error("Rate limited")]
    RateLimited,

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Status reason or body excerpt
        message: String,
    },

    /// A network error occurred while talking to the API.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl QueryError {
    /// Returns the retry classification for this error.
    ///
    /// Nothing in this crate retries on its own. Callers that want a retry
    /// policy can use this to tell transient failures from terminal ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use tradeking_quotes::errors::{QueryError, RetryClass};
    ///
    /// assert_eq!(QueryError::RateLimited.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = QueryError::InvalidIdentifier("1BAD".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::InvalidCredential { .. }
            | Self::InvalidIdentifier(_)
            | Self::NullArgument(_)
            | Self::InvalidArgument(_)
            | Self::MalformedResponse(_)
            | Self::RemoteQueryError { .. }
            | Self::Signing(_) => RetryClass::Never,

            Self::RateLimited => RetryClass::WithBackoff,

            // 5xx is worth another attempt, 4xx is not
            Self::Transport { status, .. } if *status >= 500 => RetryClass::WithBackoff,
            Self::Transport { .. } => RetryClass::Never,

            Self::Network(e) if e.is_timeout() || e.is_connect() => RetryClass::WithBackoff,
            Self::Network(_) => RetryClass::Never,
        }
    }
}
