//! CLI argument definitions.
//!
//! | Command  | Description |
//! |----------|-------------|
//! | `fields` | List the queryable fields per instrument kind |
//! | `uri`    | Print the target symbol and request URI for a query |
//! | `decode` | Demultiplex a saved response body |
//! | `quote`  | Fetch a live quote through a signing gateway |
//!
//! # Examples
//!
//! ```bash
//! tk-quotes fields --kind derivative
//! tk-quotes uri MSFT -f ask -f bid -f wk52hi
//! tk-quotes uri --option MSFT240621C00045000 -f strikeprice
//! tk-quotes decode --kind equity --file response.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tradeking_quotes::InstrumentKind;

/// Typed TradeKing quotes client
#[derive(Debug, Parser)]
#[command(name = "tk-quotes", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the field catalog.
    Fields {
        /// Only list fields for this kind (equity or derivative).
        #[arg(long)]
        kind: Option<InstrumentKind>,
    },

    /// Print the target symbol and request URI for a query.
    Uri {
        /// Equity symbol, or encoded option symbol with --option.
        symbol: String,

        /// Treat SYMBOL as an encoded option symbol (e.g. MSFT240621C00045000).
        #[arg(long)]
        option: bool,

        /// Field tag to request. Repeatable.
        #[arg(short = 'f', long = "field", value_name = "TAG")]
        fields: Vec<String>,
    },

    /// Run the demultiplexer over a saved response body.
    Decode {
        /// Registry to decode against.
        #[arg(long)]
        kind: InstrumentKind,

        /// File holding the body. Reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only print these field tags. Repeatable.
        #[arg(short = 'f', long = "field", value_name = "TAG")]
        fields: Vec<String>,
    },

    /// Fetch a quote. Requests go out unsigned, so TK_API_BASE_URL must point
    /// at a gateway that signs on the caller's behalf.
    Quote {
        /// Equity symbol, or encoded option symbol with --option.
        symbol: String,

        #[arg(long)]
        option: bool,

        #[arg(short = 'f', long = "field", value_name = "TAG")]
        fields: Vec<String>,

        /// Print the raw quote object as JSON instead of labelled values.
        #[arg(long)]
        raw: bool,
    },
}
