//! Fields the quotes endpoint returns for both equities and options.

use crate::models::FieldDefinition;

// ============================================================================
// Recent prices & trends
// ============================================================================

/// The lowest priced sell order currently available.
pub const ASK_PRICE: FieldDefinition =
    FieldDefinition::new("ask", "Ask Price", "The current ask price.");

pub const LAST_ASK_TIME: FieldDefinition =
    FieldDefinition::new("ask_time", "Last Ask Time", "The time of the last ask.");

/// Reported in hundreds.
pub const LAST_ASK_SIZE: FieldDefinition =
    FieldDefinition::new("asksz", "Last Ask Size", "The size of the last ask.");

/// The highest priced buy order currently available.
pub const BID_PRICE: FieldDefinition =
    FieldDefinition::new("bid", "Bid Price", "The current bid price.");

pub const LAST_BID_TIME: FieldDefinition =
    FieldDefinition::new("bid_time", "Last Bid Time", "The time of the last bid.");

/// Reported in hundreds.
pub const LAST_BID_SIZE: FieldDefinition =
    FieldDefinition::new("bidsz", "Last Bid Size", "The size of the last bid.");

pub const PRICE_CHANGE: FieldDefinition = FieldDefinition::new(
    "chg",
    "Price Change",
    "The change in price for the current trading session.",
);

/// `e`, `u` or `d` for even, up, down.
pub const PRICE_CHANGE_SIGN: FieldDefinition = FieldDefinition::new(
    "chg_sign",
    "Price Change Sign",
    "The direction of the price change: even, up or down.",
);

pub const PRICE_CHANGE_TEXT: FieldDefinition = FieldDefinition::new(
    "chg_t",
    "Price Change (Text)",
    "The change in price for the current trading session, formatted as text.",
);

pub const PRIOR_PRICE_CHANGE: FieldDefinition = FieldDefinition::new(
    "prchg",
    "Prior Price Change",
    "The change in price during the previous trading session.",
);

pub const PERCENT_CHANGE: FieldDefinition = FieldDefinition::new(
    "pchg",
    "Percent Change",
    "The percentage change from the prior day close.",
);

/// `e`, `u` or `d` for even, up, down.
pub const PERCENT_CHANGE_SIGN: FieldDefinition = FieldDefinition::new(
    "pchg_sign",
    "Percent Change Sign",
    "The direction of the percentage change: even, up or down.",
);

/// `e`, `u` or `d` relative to the prior trade.
pub const TRADE_TICK: FieldDefinition = FieldDefinition::new(
    "tradetick",
    "Trade Tick",
    "The tick direction from the prior trade.",
);

/// The market price. Moves between the bid and the ask during a session.
pub const LAST_TRADE_PRICE: FieldDefinition =
    FieldDefinition::new("last", "Last Trade Price", "The last trade price.");

pub const PRICE_TREND: FieldDefinition = FieldDefinition::new(
    "trend",
    "Trade Price Trend",
    "The price trend of the last 10 trades.",
);

// ============================================================================
// Volume
// ============================================================================

pub const VOLUME: FieldDefinition = FieldDefinition::new(
    "vl",
    "Volume",
    "The number of shares traded for the latest trading session.",
);

pub const SESSION_VOLUME: FieldDefinition = FieldDefinition::new(
    "sesn_vl",
    "Session Volume",
    "The volume traded in the current session.",
);

pub const PRIOR_VOLUME: FieldDefinition = FieldDefinition::new(
    "pvol",
    "Previous Volume",
    "The total number of shares traded in the previous trading session.",
);

pub const VOLUME_WEIGHTED_AVERAGE_PRICE: FieldDefinition = FieldDefinition::new(
    "vwap",
    "Volume Weighted Average",
    concat!(
        "The cumulative price of all shares bought divided by the number of shares ",
        "traded for the latest trading session."
    ),
);

pub const LAST_TRADE_VOLUME: FieldDefinition =
    FieldDefinition::new("incr_vl", "Last Trade Volume", "The volume of the last trade.");

pub const AVERAGE_DAILY_VOLUME_21: FieldDefinition = FieldDefinition::new(
    "adv_21",
    "Average Daily Volume - 21 days",
    "The average daily volume over the past 21 trade days.",
);

pub const AVERAGE_DAILY_VOLUME_30: FieldDefinition = FieldDefinition::new(
    "adv_30",
    "Average Daily Volume - 30 days",
    "The average daily volume over the past 30 trade days.",
);

pub const AVERAGE_DAILY_VOLUME_90: FieldDefinition = FieldDefinition::new(
    "adv_90",
    "Average Daily Volume - 90 days",
    "The average daily volume over the past 90 trade days.",
);

pub const TRADES_SINCE_OPEN: FieldDefinition = FieldDefinition::new(
    "tr_num",
    "Trades Since Open",
    "The number of trades since the opening of the latest trading session.",
);

pub const DOLLAR_VALUE: FieldDefinition = FieldDefinition::new(
    "dollar_value",
    "Dollar Value",
    "The total dollar value traded in the latest trading session.",
);

// ============================================================================
// Opening and closing prices
// ============================================================================

pub const OPEN_PRICE: FieldDefinition = FieldDefinition::new(
    "opn",
    "Open Price",
    "The opening price for the latest trading session.",
);

pub const PRIOR_OPEN_PRICE: FieldDefinition = FieldDefinition::new(
    "popn",
    "Prior Open Price",
    "The opening price for the previous trading session.",
);

pub const CLOSE_PRICE: FieldDefinition = FieldDefinition::new(
    "cl",
    "Close Price",
    "The closing price for the latest trading session.",
);

pub const PRIOR_CLOSE_PRICE: FieldDefinition = FieldDefinition::new(
    "pcls",
    "Prior Close Price",
    "The closing price for the previous trading session.",
);

// ============================================================================
// Highs and lows
// ============================================================================

pub const DAILY_HIGH: FieldDefinition = FieldDefinition::new(
    "hi",
    "Daily High",
    "The high trade price of the latest trading session.",
);

pub const PRIOR_DAILY_HIGH: FieldDefinition = FieldDefinition::new(
    "phi",
    "Prior Daily High",
    "The highest trade price of the previous trading session.",
);

pub const DAILY_LOW: FieldDefinition = FieldDefinition::new(
    "lo",
    "Daily Low",
    "The low trade price of the latest trading session.",
);

pub const PRIOR_DAILY_LOW: FieldDefinition = FieldDefinition::new(
    "plo",
    "Prior Daily Low",
    "The lowest trade price of the previous trading session.",
);

pub const YEARLY_HIGH: FieldDefinition =
    FieldDefinition::new("wk52hi", "Yearly High", "The 52-week high price.");

pub const YEARLY_HIGH_DATE: FieldDefinition = FieldDefinition::new(
    "wk52hidate",
    "Yearly High Date",
    "The date the 52-week high price occurred.",
);

pub const YEARLY_LOW: FieldDefinition =
    FieldDefinition::new("wk52lo", "Yearly Low", "The 52-week low price.");

pub const YEARLY_LOW_DATE: FieldDefinition = FieldDefinition::new(
    "wk52lodate",
    "Yearly Low Date",
    "The date the 52-week low price occurred.",
);

// ============================================================================
// Identification and session
// ============================================================================

pub const SYMBOL: FieldDefinition =
    FieldDefinition::new("symbol", "Symbol", "The symbol of the quoted instrument.");

pub const EXCHANGE_SYMBOL: FieldDefinition = FieldDefinition::new(
    "exch",
    "Exchange Symbol",
    "The symbol of the exchange the instrument is traded on.",
);

pub const EXCHANGE_NAME: FieldDefinition = FieldDefinition::new(
    "exch_desc",
    "Exchange Name",
    "The name of the exchange the instrument is traded on.",
);

/// `H`alted or `R`esumed.
pub const TRADING_STATUS: FieldDefinition = FieldDefinition::new(
    "tcond",
    "Trading Status",
    "The trade condition code (halted or resumed).",
);

pub const CONDITION_CODE: FieldDefinition = FieldDefinition::new(
    "qcond",
    "Condition Code",
    "The quote condition code.",
);

/// `0` for stock, `1` for option.
pub const SECURITY_CLASS: FieldDefinition = FieldDefinition::new(
    "secclass",
    "Security Class",
    "The type of security.",
);

/// One of `pre`, `regular`, `post`.
pub const TRADING_SESSION: FieldDefinition = FieldDefinition::new(
    "sesn",
    "Trading Session",
    "The trading session the quote belongs to.",
);

pub const TIMESTAMP: FieldDefinition =
    FieldDefinition::new("timestamp", "Timestamp", "The current timestamp.");

pub const LAST_TRADE_DATE_TIME: FieldDefinition = FieldDefinition::new(
    "datetime",
    "Last Trade Date And Time",
    "The date and time of the last trade.",
);

pub const LAST_TRADE_DATE: FieldDefinition =
    FieldDefinition::new("date", "Last Trade Date", "The date of the last trade.");

pub const PRIOR_LAST_TRADE_DATE: FieldDefinition = FieldDefinition::new(
    "pr_date",
    "Prior Last Trade Date",
    "The date of the last trade in the previous trading session.",
);

/// Every shared field, in catalog order.
pub(crate) const SHARED_FIELDS: &[FieldDefinition] = &[
    ASK_PRICE,
    LAST_ASK_TIME,
    LAST_ASK_SIZE,
    BID_PRICE,
    LAST_BID_TIME,
    LAST_BID_SIZE,
    PRICE_CHANGE,
    PRICE_CHANGE_SIGN,
    PRICE_CHANGE_TEXT,
    PRIOR_PRICE_CHANGE,
    PERCENT_CHANGE,
    PERCENT_CHANGE_SIGN,
    TRADE_TICK,
    LAST_TRADE_PRICE,
    PRICE_TREND,
    VOLUME,
    SESSION_VOLUME,
    PRIOR_VOLUME,
    VOLUME_WEIGHTED_AVERAGE_PRICE,
    LAST_TRADE_VOLUME,
    AVERAGE_DAILY_VOLUME_21,
    AVERAGE_DAILY_VOLUME_30,
    AVERAGE_DAILY_VOLUME_90,
    TRADES_SINCE_OPEN,
    DOLLAR_VALUE,
    OPEN_PRICE,
    PRIOR_OPEN_PRICE,
    CLOSE_PRICE,
    PRIOR_CLOSE_PRICE,
    DAILY_HIGH,
    PRIOR_DAILY_HIGH,
    DAILY_LOW,
    PRIOR_DAILY_LOW,
    YEARLY_HIGH,
    YEARLY_HIGH_DATE,
    YEARLY_LOW,
    YEARLY_LOW_DATE,
    SYMBOL,
    EXCHANGE_SYMBOL,
    EXCHANGE_NAME,
    TRADING_STATUS,
    CONDITION_CODE,
    SECURITY_CLASS,
    TRADING_SESSION,
    TIMESTAMP,
    LAST_TRADE_DATE_TIME,
    LAST_TRADE_DATE,
    PRIOR_LAST_TRADE_DATE,
];
