//! Query execution.
//!
//! [`QuoteClient`] glues the pieces together:
//!
//! ```text
//! QuoteQuery --request_uri--> QuoteExecutor --body--> QuoteResult::parse
//!                              (sign + GET)
//! ```
//!
//! The executor is a trait so the transport can be swapped; [`HttpExecutor`]
//! is the reqwest implementation and delegates OAuth signing to a
//! [`RequestSigner`].

mod credentials;
mod http;
mod traits;

pub use credentials::{
    Credentials, ACCESS_TOKEN_SECRET_VAR, ACCESS_TOKEN_VAR, CONSUMER_KEY_VAR, CONSUMER_SECRET_VAR,
};
pub use http::{HttpExecutor, DEFAULT_TIMEOUT};
pub use traits::{QuoteExecutor, RequestSigner, SignedRequest, UnsignedRequests};

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::QueryError;
use crate::query::{escape_commas, quotes_endpoint, QuoteQuery, DEFAULT_BASE_URL};
use crate::response::{parse_envelope, QuoteResult};

/// Runs quote queries through an executor and decodes the responses.
pub struct QuoteClient<E> {
    executor: E,
    base_url: String,
}

impl<E: QuoteExecutor> QuoteClient<E> {
    /// Client against the production API root.
    pub fn new(executor: E) -> Self {
        Self::with_base_url(executor, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(executor: E, base_url: impl Into<String>) -> Self {
        Self {
            executor,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The quotes endpoint queries are sent to.
    pub fn endpoint(&self) -> String {
        quotes_endpoint(&self.base_url)
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute `query` and demultiplex the response against the registry for its kind.
    pub async fn execute(&self, query: &QuoteQuery) -> Result<QuoteResult, QueryError> {
        let uri = query.request_uri(&self.endpoint());
        debug!(
            "Requesting {} quote for {} ({} fields)",
            query.kind(),
            query.target_symbol(),
            query.tags().len()
        );

        let body = self.executor.execute(&uri).await?;
        let result = QuoteResult::parse(&body, query.kind())?;

        info!(
            "Received {} of {} requested fields for {}",
            result.len(),
            query.tags().len(),
            query.target_symbol()
        );
        Ok(result)
    }

    /// Call an arbitrary API operation, e.g. `market/clock.json`, with query parameters.
    ///
    /// Values are percent-encoded and commas escaped as for quote queries.
    /// The parsed response document is returned once it has been checked for
    /// an API-level error.
    pub async fn call(
        &self,
        operation: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, QueryError> {
        let operation = operation.trim();
        if operation.is_empty() {
            return Err(QueryError::InvalidArgument("operation must not be blank".to_string()));
        }
        if params.is_empty() {
            return Err(QueryError::InvalidArgument(
                "at least one parameter is required".to_string(),
            ));
        }

        let query = params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let uri = escape_commas(&format!(
            "{}/{}?{}",
            self.base_url,
            operation.trim_start_matches('/'),
            query
        ));
        debug!("Calling operation {}", operation);

        let body = self.executor.execute(&uri).await?;
        parse_envelope(&body)
    }
}
