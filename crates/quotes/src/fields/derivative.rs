//! Option fields: the shared catalog plus contract and greeks attributes.

pub use super::shared::*;

use crate::models::FieldDefinition;

// ============================================================================
// Contract
// ============================================================================

pub const STRIKE_PRICE: FieldDefinition =
    FieldDefinition::new("strikeprice", "Strike Price", "The strike price of the option.");

/// `put` or `call`.
pub const PUT_CALL: FieldDefinition =
    FieldDefinition::new("put_call", "Put/Call", "Whether the option is a put or a call.");

/// `YYYYMMDD`.
pub const EXPIRATION_DATE: FieldDefinition =
    FieldDefinition::new("xdate", "Expiration Date", "The expiration date of the option.");

pub const EXPIRATION_DAY: FieldDefinition =
    FieldDefinition::new("xday", "Expiration Day", "The day of month the option expires.");

pub const EXPIRATION_MONTH: FieldDefinition =
    FieldDefinition::new("xmonth", "Expiration Month", "The month the option expires.");

pub const EXPIRATION_YEAR: FieldDefinition =
    FieldDefinition::new("xyear", "Expiration Year", "The year the option expires.");

pub const DAYS_TO_EXPIRATION: FieldDefinition = FieldDefinition::new(
    "days_to_expiration",
    "Days To Expiration",
    "The number of days until the option expires.",
);

pub const CONTRACT_SIZE: FieldDefinition = FieldDefinition::new(
    "contract_size",
    "Contract Size",
    "The number of shares of the underlying deliverable per contract.",
);

pub const PREMIUM_MULTIPLIER: FieldDefinition = FieldDefinition::new(
    "prem_mult",
    "Premium Multiplier",
    "The multiplier applied to the quoted premium.",
);

/// `A`merican or `E`uropean.
pub const OPTION_STYLE: FieldDefinition =
    FieldDefinition::new("op_style", "Option Style", "The exercise style of the option.");

/// `S`tandard or `N`on-standard.
pub const OPTION_DELIVERY: FieldDefinition = FieldDefinition::new(
    "op_delivery",
    "Option Delivery",
    "The settlement designation of the option.",
);

/// `0` regular, `1` adjusted.
pub const OPTION_SUBCLASS: FieldDefinition =
    FieldDefinition::new("op_subclass", "Option Subclass", "The option class.");

pub const ROOT_SYMBOL: FieldDefinition =
    FieldDefinition::new("rootsymbol", "Root Symbol", "The option root symbol.");

pub const UNDERLYING_SYMBOL: FieldDefinition = FieldDefinition::new(
    "undersymbol",
    "Underlying Symbol",
    "The symbol of the underlying security.",
);

pub const UNDERLYING_CUSIP: FieldDefinition = FieldDefinition::new(
    "under_cusip",
    "Underlying CUSIP",
    "The CUSIP number of the underlying security.",
);

pub const ISSUE_DESCRIPTION: FieldDefinition = FieldDefinition::new(
    "issue_desc",
    "Issue Description",
    "The description of the option contract.",
);

// ============================================================================
// Interest
// ============================================================================

pub const OPEN_INTEREST: FieldDefinition = FieldDefinition::new(
    "openinterest",
    "Open Interest",
    "The number of contracts currently open.",
);

pub const PRIOR_OPEN_INTEREST: FieldDefinition = FieldDefinition::new(
    "pr_openinterest",
    "Prior Open Interest",
    "The number of contracts open at the end of the previous trading session.",
);

// ============================================================================
// Valuation and greeks
// ============================================================================

pub const IMPLIED_VOLATILITY: FieldDefinition = FieldDefinition::new(
    "imp_volatility",
    "Implied Volatility",
    "The volatility implied by the option price.",
);

pub const ESTIMATED_VALUE: FieldDefinition = FieldDefinition::new(
    "opt_val",
    "Estimated Option Value",
    "The estimated theoretical value of the option.",
);

pub const DELTA: FieldDefinition = FieldDefinition::new(
    "idelta",
    "Delta",
    "The change in option price per unit change in the underlying, from implied volatility.",
);

pub const GAMMA: FieldDefinition = FieldDefinition::new(
    "igamma",
    "Gamma",
    "The change in delta per unit change in the underlying, from implied volatility.",
);

pub const THETA: FieldDefinition = FieldDefinition::new(
    "itheta",
    "Theta",
    "The change in option price per day of time decay, from implied volatility.",
);

pub const VEGA: FieldDefinition = FieldDefinition::new(
    "ivega",
    "Vega",
    "The change in option price per point of volatility, from implied volatility.",
);

pub const RHO: FieldDefinition = FieldDefinition::new(
    "irho",
    "Rho",
    "The change in option price per point of interest rate, from implied volatility.",
);

/// Option-only fields, in catalog order.
pub(crate) const DERIVATIVE_FIELDS: &[FieldDefinition] = &[
    STRIKE_PRICE,
    PUT_CALL,
    EXPIRATION_DATE,
    EXPIRATION_DAY,
    EXPIRATION_MONTH,
    EXPIRATION_YEAR,
    DAYS_TO_EXPIRATION,
    CONTRACT_SIZE,
    PREMIUM_MULTIPLIER,
    OPTION_STYLE,
    OPTION_DELIVERY,
    OPTION_SUBCLASS,
    ROOT_SYMBOL,
    UNDERLYING_SYMBOL,
    UNDERLYING_CUSIP,
    ISSUE_DESCRIPTION,
    OPEN_INTEREST,
    PRIOR_OPEN_INTEREST,
    IMPLIED_VOLATILITY,
    ESTIMATED_VALUE,
    DELTA,
    GAMMA,
    THETA,
    VEGA,
    RHO,
];
