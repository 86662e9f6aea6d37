/// Classification for retry policy.
///
/// The crate itself never retries. This tells a caller (or an executor
/// wrapping the transport) whether trying the same request again can help.
///
/// | Class | Meaning |
/// |-------|---------|
/// | `Never` | Bad input, bad credentials, API-level error, or unparseable body |
/// | `WithBackoff` | Rate limiting, timeouts, connection failures, HTTP 5xx |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry. The request is invalid or the API rejected it outright.
    Never,

    /// Transient failure. The same request may succeed after a delay.
    WithBackoff,
}
