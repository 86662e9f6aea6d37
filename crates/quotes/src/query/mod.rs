//! Quote query builder.
//!
//! A [`QuoteQuery`] pairs a validated [`InstrumentId`] with an ordered,
//! de-duplicated selection of field tags and renders the request URI:
//!
//! ```text
//! <endpoint>?symbols=<TARGET>[&fids=<tag1>%2C<tag2>...]
//! ```
//!
//! Commas are escaped in the finished URI so the request signer canonicalizes
//! exactly the string that goes on the wire.

use crate::errors::QueryError;
use crate::models::{EquitySymbol, FieldDefinition, InstrumentId, InstrumentKind, OptionContract};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.tradeking.com/v1";

/// Path of the extended quotes endpoint, relative to the API root.
pub const QUOTES_PATH: &str = "/market/ext/quotes.json";

/// Fully qualified default quotes endpoint.
pub const DEFAULT_QUOTES_ENDPOINT: &str = "https://api.tradeking.com/v1/market/ext/quotes.json";

/// Quotes endpoint under the given API root.
pub fn quotes_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), QUOTES_PATH)
}

/// Escapes literal commas, the last encoding pass applied to request URIs.
pub(crate) fn escape_commas(uri: &str) -> String {
    uri.replace(',', "%2C")
}

/// Request descriptor for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteQuery {
    instrument: InstrumentId,
    tags: Vec<&'static str>,
}

impl QuoteQuery {
    pub fn new(instrument: impl Into<InstrumentId>) -> Self {
        Self {
            instrument: instrument.into(),
            tags: Vec::new(),
        }
    }

    /// Query for a stock. The symbol is upper-cased, then validated.
    pub fn equity(symbol: &str) -> Result<Self, QueryError> {
        Ok(Self::new(EquitySymbol::parse(symbol)?))
    }

    pub fn option(contract: OptionContract) -> Self {
        Self::new(contract)
    }

    /// Query for an option given its encoded symbol, e.g. `SYM240621C00045000`.
    pub fn option_symbol(encoded: &str) -> Result<Self, QueryError> {
        Ok(Self::new(OptionContract::parse(encoded)?))
    }

    /// Select a field. Selecting an already selected tag is a no-op.
    pub fn add(mut self, field: &FieldDefinition) -> Self {
        self.push_tag(field.tag());
        self
    }

    /// Select every field of `fields`, in order.
    ///
    /// `None` is rejected with [`QueryError::NullArgument`]; an empty
    /// selection is accepted and changes nothing.
    pub fn add_all<'a, I>(mut self, fields: Option<I>) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = &'a FieldDefinition>,
    {
        let fields = fields.ok_or(QueryError::NullArgument("fields"))?;
        for field in fields {
            self.push_tag(field.tag());
        }
        Ok(self)
    }

    fn push_tag(&mut self, tag: &'static str) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    pub fn kind(&self) -> InstrumentKind {
        self.instrument.kind()
    }

    /// Selected tags in first-seen order.
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    /// The `symbols` value: the equity symbol verbatim, or the encoded option symbol.
    pub fn target_symbol(&self) -> String {
        self.instrument.target_symbol()
    }

    /// Request URI against `base_endpoint`, with commas escaped.
    pub fn request_uri(&self, base_endpoint: &str) -> String {
        let mut uri = format!("{}?symbols={}", base_endpoint, self.target_symbol());
        if !self.tags.is_empty() {
            uri.push_str("&fids=");
            uri.push_str(&self.tags.join(","));
        }
        escape_commas(&uri)
    }
}
