//! Collaborator traits for request signing and execution.

use async_trait::async_trait;

use super::credentials::Credentials;
use crate::errors::QueryError;

/// A request ready to be sent: the final URI plus any headers the signer added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub uri: String,
    pub headers: Vec<(String, String)>,
}

impl SignedRequest {
    /// A request with no signature applied.
    pub fn unsigned(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            headers: Vec::new(),
        }
    }
}

/// OAuth 1.0 request signer.
///
/// Receives the URI exactly as it will be sent, with commas already escaped,
/// and returns it with signature material attached, either as query
/// parameters or as an `Authorization` header.
pub trait RequestSigner: Send + Sync {
    fn sign(
        &self,
        method: &str,
        uri: &str,
        credentials: &Credentials,
    ) -> Result<SignedRequest, QueryError>;
}

/// Signer that sends requests as-is, for gateways that sign on the caller's behalf.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedRequests;

impl RequestSigner for UnsignedRequests {
    fn sign(
        &self,
        _method: &str,
        uri: &str,
        _credentials: &Credentials,
    ) -> Result<SignedRequest, QueryError> {
        Ok(SignedRequest::unsigned(uri))
    }
}

/// Performs a signed GET and returns the raw response body.
///
/// Implementations own transport concerns (signing, timeouts, retries).
/// The body is returned untouched; API-level errors encoded in it are
/// detected by the caller.
#[async_trait]
pub trait QuoteExecutor: Send + Sync {
    async fn execute(&self, uri: &str) -> Result<String, QueryError>;
}
