//! Response demultiplexer.
//!
//! Maps the tag-keyed properties of a quotes response back to the
//! [`FieldDefinition`]s of the registry for the queried instrument kind.
//!
//! Expected body shape:
//!
//! ```json
//! { "response": { "quotes": { "quote": { "ask": "10.5", "bid": "10.4" } } } }
//! ```
//!
//! and the application-level error variant:
//!
//! ```json
//! { "response": { "type": "Error", "name": "...", "description": "..." } }
//! ```

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::errors::QueryError;
use crate::models::{FieldDefinition, InstrumentKind};
use crate::registry;

/// Parse a response body and reject application-level errors.
///
/// Returns the parsed document. Fails with [`QueryError::MalformedResponse`]
/// when the body is not JSON or has no top-level `response` object, and with
/// [`QueryError::RemoteQueryError`] when `response.type` is `"Error"`.
pub fn parse_envelope(body: &str) -> Result<Value, QueryError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| QueryError::MalformedResponse(format!("body is not valid JSON: {}", e)))?;

    let response = document
        .get("response")
        .ok_or_else(|| QueryError::MalformedResponse("missing 'response' element".to_string()))?;

    if response.get("type").and_then(Value::as_str) == Some("Error") {
        let text = |key: &str| response.get(key).map(stringify_value).unwrap_or_default();
        return Err(QueryError::RemoteQueryError {
            name: text("name"),
            description: text("description"),
        });
    }

    Ok(document)
}

/// Text captured for a response value: strings verbatim, `null` as empty,
/// anything else as its JSON text.
fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Borrowed view of the quote path, keeping the quote object as raw JSON text.
#[derive(Deserialize)]
struct QuoteDocument<'a> {
    #[serde(borrow)]
    response: QuoteSection<'a>,
}

#[derive(Deserialize)]
struct QuoteSection<'a> {
    #[serde(borrow)]
    quotes: QuoteList<'a>,
}

#[derive(Deserialize)]
struct QuoteList<'a> {
    #[serde(borrow)]
    quote: &'a RawValue,
}

/// Text captured for a raw response value: strings unescaped, `null` as
/// empty, anything else exactly as it appears in the body.
fn capture_raw(raw: &RawValue) -> Result<String, serde_json::Error> {
    let text = raw.get();
    if text.starts_with('"') {
        serde_json::from_str(text)
    } else if text == "null" {
        Ok(String::new())
    } else {
        Ok(text.to_string())
    }
}

/// Decoded quote: field definition to raw value, built once from a response body.
#[derive(Debug, Clone)]
pub struct QuoteResult {
    kind: InstrumentKind,
    full_response: String,
    quote_text: String,
    quote: Value,
    values: HashMap<FieldDefinition, String>,
}

impl QuoteResult {
    /// Decode `body` against the registry for `kind`.
    ///
    /// Keys of the quote object with no matching tag are skipped.
    pub fn parse(body: &str, kind: InstrumentKind) -> Result<Self, QueryError> {
        let document = parse_envelope(body)?;

        let quote = document.pointer("/response/quotes/quote").ok_or_else(|| {
            QueryError::MalformedResponse("missing 'response.quotes.quote' element".to_string())
        })?;

        if !quote.is_object() {
            return Err(QueryError::MalformedResponse(format!(
                "'response.quotes.quote' is not an object (found {})",
                json_type_name(quote)
            )));
        }

        let raw_quote = serde_json::from_str::<QuoteDocument>(body)
            .map(|document| document.response.quotes.quote)
            .map_err(|e| QueryError::MalformedResponse(format!("unreadable quote: {}", e)))?;
        let properties: HashMap<String, &RawValue> = serde_json::from_str(raw_quote.get())
            .map_err(|e| QueryError::MalformedResponse(format!("unreadable quote: {}", e)))?;

        let registry = registry::for_kind(kind);
        let mut values = HashMap::with_capacity(properties.len());
        for (key, raw) in properties {
            match registry.find_by_tag(&key) {
                Some(field) => {
                    let value = capture_raw(raw).map_err(|e| {
                        QueryError::MalformedResponse(format!("field '{}': {}", key, e))
                    })?;
                    values.insert(*field, value);
                }
                None => debug!("Ignoring uncataloged {} quote field '{}'", kind, key),
            }
        }

        Ok(Self {
            kind,
            full_response: body.to_string(),
            quote_text: raw_quote.get().to_string(),
            quote: quote.clone(),
            values,
        })
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    /// Raw value captured for `field`, or `None` if the response did not carry it.
    pub fn get(&self, field: &FieldDefinition) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Captured value parsed as a decimal. `None` when absent or not numeric.
    pub fn get_decimal(&self, field: &FieldDefinition) -> Option<Decimal> {
        self.get(field)?.trim().parse::<Decimal>().ok()
    }

    pub fn contains(&self, field: &FieldDefinition) -> bool {
        self.values.contains_key(field)
    }

    /// The response body exactly as received.
    pub fn full_response(&self) -> &str {
        &self.full_response
    }

    /// The located quote object exactly as it appears in the body.
    pub fn quote_response(&self) -> &str {
        &self.quote_text
    }

    /// The located quote object, parsed, including uncataloged keys.
    pub fn quote_json(&self) -> &Value {
        &self.quote
    }

    /// Captured fields in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldDefinition, &str)> + '_ {
        registry::for_kind(self.kind)
            .all()
            .iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
