//! Equity fields: the shared catalog plus stock-only attributes.

pub use super::shared::*;

use crate::models::FieldDefinition;

// ============================================================================
// Average daily prices
// ============================================================================

pub const AVERAGE_DAILY_PRICE_100: FieldDefinition = FieldDefinition::new(
    "adp_100",
    "Average Daily Price - 100 days",
    "The average daily price over the past 100 trade days.",
);

pub const PRIOR_AVERAGE_DAILY_PRICE_100: FieldDefinition = FieldDefinition::new(
    "pr_adp_100",
    "Prior Average Daily Price - 100 days",
    "The prior average daily price over the past 100 trade days.",
);

pub const AVERAGE_DAILY_PRICE_200: FieldDefinition = FieldDefinition::new(
    "adp_200",
    "Average Daily Price - 200 days",
    "The average daily price over the past 200 trade days.",
);

pub const PRIOR_AVERAGE_DAILY_PRICE_200: FieldDefinition = FieldDefinition::new(
    "pr_adp_200",
    "Prior Average Daily Price - 200 days",
    "The prior average daily price over the past 200 trade days.",
);

pub const AVERAGE_DAILY_PRICE_50: FieldDefinition = FieldDefinition::new(
    "adp_50",
    "Average Daily Price - 50 days",
    "The average daily price over the past 50 trade days.",
);

pub const PRIOR_AVERAGE_DAILY_PRICE_50: FieldDefinition = FieldDefinition::new(
    "pr_adp_50",
    "Prior Average Daily Price - 50 days",
    "The prior average daily price over the past 50 trade days.",
);

pub const BID_TICK_DIRECTION: FieldDefinition = FieldDefinition::new(
    "bidtick",
    "Bid Tick Direction",
    "The tick direction since the last bid.",
);

// ============================================================================
// Dividends
// ============================================================================

pub const DIVIDEND: FieldDefinition =
    FieldDefinition::new("div", "Dividend", "The latest announced cash dividend.");

pub const DIVIDEND_EX_DATE: FieldDefinition = FieldDefinition::new(
    "divexdate",
    "Dividend Ex-Date",
    "The ex-dividend date of the latest dividend.",
);

/// `A`nnual, `S`emi-annual, `Q`uarterly, `M`onthly.
pub const DIVIDEND_FREQUENCY: FieldDefinition = FieldDefinition::new(
    "divfreq",
    "Dividend Frequency",
    "How often the dividend is paid.",
);

pub const DIVIDEND_PAY_DATE: FieldDefinition = FieldDefinition::new(
    "divpaydt",
    "Dividend Pay Date",
    "The payment date of the latest dividend.",
);

pub const INDICATED_ANNUAL_DIVIDEND: FieldDefinition = FieldDefinition::new(
    "iad",
    "Indicated Annual Dividend",
    "The indicated annual dividend.",
);

/// Percentage.
pub const DIVIDEND_YIELD: FieldDefinition =
    FieldDefinition::new("yield", "Dividend Yield", "The dividend yield as a percentage.");

// ============================================================================
// Metrics
// ============================================================================

pub const YEARLY_VOLATILITY: FieldDefinition = FieldDefinition::new(
    "volatility12",
    "Yearly Volatility",
    "The one year volatility measure.",
);

/// All shares authorized, issued and held by investors. Excludes treasury shares.
pub const SHARES_OUTSTANDING: FieldDefinition = FieldDefinition::new(
    "sho",
    "Number Of Outstanding Shares",
    "The number of outstanding shares.",
);

pub const PRICE_TO_EARNINGS_RATIO: FieldDefinition = FieldDefinition::new(
    "pe",
    "Price To Earnings Ratio",
    "The current share price compared to per-share earnings.",
);

pub const EARNINGS_PER_SHARE: FieldDefinition = FieldDefinition::new(
    "eps",
    "Earnings Per Share",
    "The portion of the company's profit allocated to each outstanding share.",
);

/// Adjusted for splits, dividends and return of capital distributions.
pub const COST_BASIS: FieldDefinition = FieldDefinition::new(
    "basis",
    "Cost Basis",
    concat!(
        "The original value of the asset for tax purposes, adjusted for stock splits, ",
        "dividends and return of capital distributions."
    ),
);

/// 1 moves with the market, below 1 is less volatile, above 1 is more volatile.
pub const BETA: FieldDefinition = FieldDefinition::new(
    "beta",
    "Beta Coefficient",
    "The volatility, or systematic risk, of the stock compared to the market as a whole.",
);

// ============================================================================
// Company
// ============================================================================

pub const COMPANY_NAME: FieldDefinition =
    FieldDefinition::new("name", "Company Name", "The company name.");

pub const CUSIP: FieldDefinition =
    FieldDefinition::new("cusip", "CUSIP", "The CUSIP number of the stock.");

pub const BOOK_VALUE: FieldDefinition =
    FieldDefinition::new("prbook", "Book Value Price", "The book value price of the company.");

pub const OPTIONS_AVAILABLE: FieldDefinition = FieldDefinition::new(
    "op_flag",
    "Are Options Available",
    "Whether or not options are available for this stock.",
);

/// Stock-only fields, in catalog order.
pub(crate) const EQUITY_FIELDS: &[FieldDefinition] = &[
    AVERAGE_DAILY_PRICE_100,
    PRIOR_AVERAGE_DAILY_PRICE_100,
    AVERAGE_DAILY_PRICE_200,
    PRIOR_AVERAGE_DAILY_PRICE_200,
    AVERAGE_DAILY_PRICE_50,
    PRIOR_AVERAGE_DAILY_PRICE_50,
    BID_TICK_DIRECTION,
    DIVIDEND,
    DIVIDEND_EX_DATE,
    DIVIDEND_FREQUENCY,
    DIVIDEND_PAY_DATE,
    INDICATED_ANNUAL_DIVIDEND,
    DIVIDEND_YIELD,
    YEARLY_VOLATILITY,
    SHARES_OUTSTANDING,
    PRICE_TO_EARNINGS_RATIO,
    EARNINGS_PER_SHARE,
    COST_BASIS,
    BETA,
    COMPANY_NAME,
    CUSIP,
    BOOK_VALUE,
    OPTIONS_AVAILABLE,
];
