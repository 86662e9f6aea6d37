//! TradeKing Quotes Crate
//!
//! Typed access to the TradeKing extended quotes endpoint
//! (`/v1/market/ext/quotes.json`).
//!
//! # Overview
//!
//! Callers pick named fields from a fixed catalog, build a query for one
//! stock or option, execute it through a signing transport, and get back a
//! result keyed by the same field definitions:
//!
//! ```text
//! +------------------+     +--------------------+
//! |  fields::equity  |     | fields::derivative |  (named FieldDefinition consts)
//! +------------------+     +--------------------+
//!           |                       |
//!           v                       v
//! +------------------+     +------------------+
//! |   QuoteQuery     | <-- |  InstrumentId    |  (symbol / option contract)
//! +------------------+     +------------------+
//!           |
//!           v  request_uri()
//! +------------------+
//! |  QuoteExecutor   |  (sign + GET, e.g. HttpExecutor)
//! +------------------+
//!           |
//!           v  raw body
//! +------------------+     +------------------+
//! |   QuoteResult    | --> |  FieldRegistry   |  (tag -> FieldDefinition)
//! +------------------+     +------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use tradeking_quotes::fields::equity;
//! use tradeking_quotes::{InstrumentKind, QuoteQuery, QuoteResult, DEFAULT_QUOTES_ENDPOINT};
//!
//! let query = QuoteQuery::equity("msft")?
//!     .add(&equity::ASK_PRICE)
//!     .add(&equity::YEARLY_HIGH);
//! assert_eq!(
//!     query.request_uri(DEFAULT_QUOTES_ENDPOINT),
//!     "https://api.tradeking.com/v1/market/ext/quotes.json?symbols=MSFT&fids=ask%2Cwk52hi"
//! );
//!
//! let body = r#"{"response":{"quotes":{"quote":{"ask":"421.50","wk52hi":"468.35"}}}}"#;
//! let result = QuoteResult::parse(body, InstrumentKind::Equity)?;
//! assert_eq!(result.get(&equity::ASK_PRICE), Some("421.50"));
//! # Ok::<(), tradeking_quotes::QueryError>(())
//! ```
//!
//! # Core Types
//!
//! - [`FieldDefinition`] - Wire tag plus display labels
//! - [`FieldRegistry`] - Per-kind catalog with tag lookup
//! - [`InstrumentId`] - Equity symbol or option contract
//! - [`QuoteQuery`] - Validated request descriptor
//! - [`QuoteResult`] - Field-keyed response values
//! - [`QuoteClient`] - Builder, executor and demultiplexer wired together

pub mod client;
pub mod errors;
pub mod fields;
pub mod models;
pub mod query;
pub mod registry;
pub mod response;

// Re-export all public types from models
pub use models::{
    EquitySymbol, FieldDefinition, InstrumentId, InstrumentKind, OptionContract, OptionType,
};

pub use errors::{QueryError, RetryClass};
pub use registry::FieldRegistry;

pub use query::{QuoteQuery, DEFAULT_BASE_URL, DEFAULT_QUOTES_ENDPOINT};
pub use response::QuoteResult;

// Re-export client types
pub use client::{
    Credentials, HttpExecutor, QuoteClient, QuoteExecutor, RequestSigner, SignedRequest,
    UnsignedRequests,
};
