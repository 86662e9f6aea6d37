//! Quote query models
//!
//! This module contains the core data types shared by the registry, the
//! query builder and the response demultiplexer:
//! - `field` - Field definitions (tag plus presentation labels)
//! - `instrument` - Instrument kinds, option types and the `InstrumentId` enum
//! - `symbol` - Validated equity symbols
//! - `option` - Option contract descriptors and their wire encoding

mod field;
mod instrument;
mod option;
mod symbol;

pub use field::FieldDefinition;
pub use instrument::{InstrumentId, InstrumentKind, OptionType};
pub use option::OptionContract;
pub use symbol::EquitySymbol;
