use std::time::Duration;

use tradeking_quotes::DEFAULT_BASE_URL;

pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("TK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_ms: u64 = std::env::var("TK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let log_format = std::env::var("TK_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }
}
