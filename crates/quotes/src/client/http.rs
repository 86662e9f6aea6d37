use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::credentials::Credentials;
use super::traits::{QuoteExecutor, RequestSigner};
use crate::errors::QueryError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes quote requests over HTTPS with reqwest.
///
/// Every request is passed through the configured [`RequestSigner`] first.
/// HTTP 429 maps to [`QueryError::RateLimited`], any other non-success status
/// to [`QueryError::Transport`]. Nothing is retried.
pub struct HttpExecutor {
    client: Client,
    credentials: Credentials,
    signer: Arc<dyn RequestSigner>,
}

impl HttpExecutor {
    pub fn new(credentials: Credentials, signer: Arc<dyn RequestSigner>) -> Self {
        Self::with_timeout(credentials, signer, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        credentials: Credentials,
        signer: Arc<dyn RequestSigner>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            signer,
        }
    }
}

#[async_trait]
impl QuoteExecutor for HttpExecutor {
    async fn execute(&self, uri: &str) -> Result<String, QueryError> {
        let signed = self.signer.sign("GET", uri, &self.credentials)?;

        let mut request = self.client.get(&signed.uri);
        for (name, value) in &signed.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("GET {}", uri);

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Quote request rate limited: {}", uri);
            return Err(QueryError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string()
            } else {
                body.chars().take(200).collect()
            };
            warn!("Quote request failed with HTTP {}: {}", status.as_u16(), message);
            return Err(QueryError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::traits::{SignedRequest, UnsignedRequests};
    use crate::errors::RetryClass;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const KEY: &str = "abcdefghijABCDEFGHIJ0123456789abcdefghij";

    fn credentials() -> Credentials {
        Credentials::new(KEY, KEY, KEY, KEY).unwrap()
    }

    /// Serve one canned HTTP response and return the request head it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let response = format!(
                concat!(
                    "HTTP/1.1 {}\r\n",
                    "Content-Type: application/json\r\n",
                    "Content-Length: {}\r\n",
                    "Connection: close\r\n\r\n{}"
                ),
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    struct HeaderSigner {
        calls: AtomicUsize,
    }

    impl RequestSigner for HeaderSigner {
        fn sign(
            &self,
            method: &str,
            uri: &str,
            credentials: &Credentials,
        ) -> Result<SignedRequest, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(method, "GET");
            Ok(SignedRequest {
                uri: uri.to_string(),
                headers: vec![(
                    "Authorization".to_string(),
                    format!("OAuth oauth_consumer_key=\"{}\"", credentials.consumer_key()),
                )],
            })
        }
    }

    struct RefusingSigner;

    impl RequestSigner for RefusingSigner {
        fn sign(&self, _: &str, _: &str, _: &Credentials) -> Result<SignedRequest, QueryError> {
            Err(QueryError::Signing("clock skew".to_string()))
        }
    }

    #[tokio::test]
    async fn test_success_returns_body_and_sends_signature() {
        let (base, server) = serve_once("200 OK", r#"{"response":{}}"#).await;
        let signer = Arc::new(HeaderSigner {
            calls: AtomicUsize::new(0),
        });
        let executor = HttpExecutor::new(credentials(), signer.clone());

        let body = executor
            .execute(&format!("{}/quotes.json?symbols=AAPL&fids=ask%2Cbid", base))
            .await
            .unwrap();

        assert_eq!(body, r#"{"response":{}}"#);
        assert_eq!(signer.calls.load(Ordering::SeqCst), 1);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /quotes.json?symbols=AAPL&fids=ask%2Cbid "));
        assert!(request.to_lowercase().contains("authorization: oauth"));
    }

    #[tokio::test]
    async fn test_too_many_requests_is_rate_limited() {
        let (base, _server) = serve_once("429 Too Many Requests", "").await;
        let executor = HttpExecutor::new(credentials(), Arc::new(UnsignedRequests));

        let err = executor.execute(&format!("{}/q", base)).await.unwrap_err();
        assert!(matches!(err, QueryError::RateLimited));
        assert_eq!(err.retry_class(), RetryClass::WithBackoff);
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let (base, _server) = serve_once("503 Service Unavailable", "").await;
        let executor = HttpExecutor::new(credentials(), Arc::new(UnsignedRequests));

        let err = executor.execute(&format!("{}/q", base)).await.unwrap_err();
        match err {
            QueryError::Transport { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_signing_failure_short_circuits() {
        let executor = HttpExecutor::new(credentials(), Arc::new(RefusingSigner));
        let err = executor
            .execute("http://127.0.0.1:9/never-sent")
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Signing(_)));
    }
}
