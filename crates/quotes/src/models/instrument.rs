use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::option::OptionContract;
use super::symbol::EquitySymbol;

/// Instrument classification. Selects which field registry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Equity,
    Derivative,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Derivative => "derivative",
        }
    }
}

impl Display for InstrumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equity" | "stock" => Ok(Self::Equity),
            "derivative" | "option" => Ok(Self::Derivative),
            other => Err(format!(
                "unknown instrument kind '{}': expected equity or derivative",
                other
            )),
        }
    }
}

/// Option type, either call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Single-letter code used in encoded option symbols.
    pub fn code(&self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::Call),
            'P' => Some(Self::Put),
            _ => None,
        }
    }
}

/// The instrument a quote query targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentId {
    /// Exchange-traded stock
    Equity(EquitySymbol),

    /// Listed option contract
    Derivative(OptionContract),
}

impl InstrumentId {
    /// Returns the instrument kind for this identifier
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Equity(_) => InstrumentKind::Equity,
            Self::Derivative(_) => InstrumentKind::Derivative,
        }
    }

    /// The value sent as the `symbols` query parameter.
    pub fn target_symbol(&self) -> String {
        match self {
            Self::Equity(symbol) => symbol.as_str().to_string(),
            Self::Derivative(contract) => contract.symbol(),
        }
    }
}

impl From<EquitySymbol> for InstrumentId {
    fn from(value: EquitySymbol) -> Self {
        Self::Equity(value)
    }
}

impl From<OptionContract> for InstrumentId {
    fn from(value: OptionContract) -> Self {
        Self::Derivative(value)
    }
}
