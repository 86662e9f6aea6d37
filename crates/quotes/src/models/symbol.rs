use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::QueryError;

lazy_static! {
    /// Equity symbols are plain upper-case letters.
    /// Format: ^[A-Z]+$
    static ref EQUITY_SYMBOL_REGEX: Regex =
        Regex::new(r"^[A-Z]+$").expect("Invalid regex pattern");
}

/// Validated, upper-cased equity symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquitySymbol(String);

impl EquitySymbol {
    /// Normalize `input` to ASCII upper case and validate it against `^[A-Z]+$`.
    ///
    /// Non-ASCII letters are left as-is and therefore rejected. Surrounding
    /// whitespace is not trimmed; `" MSFT"` is rejected.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        if input.trim().is_empty() {
            return Err(QueryError::InvalidIdentifier("symbol is empty".to_string()));
        }

        let normalized = input.to_ascii_uppercase();
        if !EQUITY_SYMBOL_REGEX.is_match(&normalized) {
            return Err(QueryError::InvalidIdentifier(format!(
                "'{}' is not a valid stock symbol",
                normalized
            )));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EquitySymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EquitySymbol {
    type Error = QueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
