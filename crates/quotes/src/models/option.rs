//! Option contract descriptors and their encoded symbol form.
//!
//! The quotes endpoint addresses an option by a single symbol:
//!
//! ```text
//! SYM 24 06 21 C 00045000
//! |   |  |  |  | |
//! |   |  |  |  | +-- strike, 8 digits, 3 implied decimals (45.000)
//! |   |  |  |  +---- C(all) or P(ut)
//! |   |  |  +------- expiration day
//! |   |  +---------- expiration month
//! |   +------------- expiration year (2 digits, 20xx)
//! +----------------- underlying symbol
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use super::instrument::OptionType;
use super::symbol::EquitySymbol;
use crate::errors::QueryError;

lazy_static! {
    /// Encoded option symbol.
    /// Format: ^([A-Z]+)(\d{2})(\d{2})(\d{2})(C|P)(\d{8})$
    static ref OPTION_SYMBOL_REGEX: Regex =
        Regex::new(r"^([A-Z]+)(\d{2})(\d{2})(\d{2})(C|P)(\d{8})$")
            .expect("Invalid regex pattern");
}

/// Decimal places implied by the 8-digit strike field.
const STRIKE_SCALE: u32 = 3;

/// Width of the encoded strike field.
const STRIKE_WIDTH: usize = 8;

/// Largest strike the 8-digit field can carry (99999.999).
fn max_strike() -> Decimal {
    Decimal::new(99_999_999, STRIKE_SCALE)
}

/// A listed option contract: underlying, expiration, call/put and strike.
///
/// Construction validates every part and rejects contracts that have already
/// expired, so a value of this type can always be encoded and queried.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionContract {
    underlying: EquitySymbol,
    expiration: NaiveDate,
    option_type: OptionType,
    strike: Decimal,
}

impl OptionContract {
    /// Build a contract from its parts, checking expiry against today's local date.
    ///
    /// Two-digit years are read as 20xx.
    pub fn new(
        underlying: &str,
        expiration_year: i32,
        expiration_month: u32,
        expiration_day: u32,
        option_type: OptionType,
        strike: Decimal,
    ) -> Result<Self, QueryError> {
        Self::new_as_of(
            underlying,
            expiration_year,
            expiration_month,
            expiration_day,
            option_type,
            strike,
            Local::now().date_naive(),
        )
    }

    /// Same as [`new`](Self::new) with an explicit reference date for the expiry check.
    pub fn new_as_of(
        underlying: &str,
        expiration_year: i32,
        expiration_month: u32,
        expiration_day: u32,
        option_type: OptionType,
        strike: Decimal,
        today: NaiveDate,
    ) -> Result<Self, QueryError> {
        let underlying = EquitySymbol::parse(underlying)?;

        if expiration_year < 0 {
            return Err(QueryError::InvalidIdentifier(
                "the option expiration year must not be negative".to_string(),
            ));
        }

        if !(1..=12).contains(&expiration_month) {
            return Err(QueryError::InvalidIdentifier(
                "the option expiration month must be between 1 and 12 (inclusive)".to_string(),
            ));
        }

        // Range only; whether the day exists in that month is checked below
        if !(1..=31).contains(&expiration_day) {
            return Err(QueryError::InvalidIdentifier(
                "the option expiration day must be between 1 and 31 (inclusive)".to_string(),
            ));
        }

        let strike = normalize_strike(strike)?;

        let year = if expiration_year < 100 {
            expiration_year + 2000
        } else {
            expiration_year
        };

        let expiration = NaiveDate::from_ymd_opt(year, expiration_month, expiration_day)
            .ok_or_else(|| {
                QueryError::InvalidIdentifier(format!(
                    "{:04}-{:02}-{:02} is not a valid calendar date",
                    year, expiration_month, expiration_day
                ))
            })?;

        if expiration < today {
            return Err(QueryError::InvalidIdentifier(format!(
                "the requested option expired on {}",
                expiration.format("%d/%m/%Y")
            )));
        }

        Ok(Self {
            underlying,
            expiration,
            option_type,
            strike,
        })
    }

    /// Build a contract from a calendar expiration date.
    pub fn from_expiration(
        underlying: &str,
        expiration: NaiveDate,
        option_type: OptionType,
        strike: Decimal,
    ) -> Result<Self, QueryError> {
        Self::new(
            underlying,
            expiration.year(),
            expiration.month(),
            expiration.day(),
            option_type,
            strike,
        )
    }

    /// Parse an encoded option symbol such as `MSFT240621C00045000`.
    pub fn parse(encoded: &str) -> Result<Self, QueryError> {
        Self::parse_as_of(encoded, Local::now().date_naive())
    }

    /// Same as [`parse`](Self::parse) with an explicit reference date for the expiry check.
    pub fn parse_as_of(encoded: &str, today: NaiveDate) -> Result<Self, QueryError> {
        if encoded.trim().is_empty() {
            return Err(QueryError::InvalidIdentifier("option symbol is empty".to_string()));
        }

        let caps = OPTION_SYMBOL_REGEX.captures(encoded).ok_or_else(|| {
            QueryError::InvalidIdentifier(format!(
                "'{}' is not a valid option symbol",
                encoded
            ))
        })?;

        // The regex guarantees digits, so these only fail on overflow
        let number = |index: usize| -> Result<i64, QueryError> {
            caps[index].parse::<i64>().map_err(|e| {
                QueryError::InvalidIdentifier(format!("'{}': {}", encoded, e))
            })
        };

        let option_type = if &caps[5] == "C" {
            OptionType::Call
        } else {
            OptionType::Put
        };
        let strike = Decimal::new(number(6)?, STRIKE_SCALE);

        Self::new_as_of(
            &caps[1],
            number(2)? as i32,
            number(3)? as u32,
            number(4)? as u32,
            option_type,
            strike,
            today,
        )
    }

    pub fn underlying(&self) -> &EquitySymbol {
        &self.underlying
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Four-digit expiration year.
    pub fn expiration_year(&self) -> i32 {
        self.expiration.year()
    }

    pub fn expiration_month(&self) -> u32 {
        self.expiration.month()
    }

    pub fn expiration_day(&self) -> u32 {
        self.expiration.day()
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn strike(&self) -> Decimal {
        self.strike
    }

    /// Strike as sent on the wire: 3 decimals, point removed, zero-padded to 8.
    ///
    /// `45` becomes `"45.000"`, then `"45000"`, then `"00045000"`.
    pub fn encoded_strike(&self) -> String {
        let mut strike = self.strike;
        strike.rescale(STRIKE_SCALE);
        let digits = strike.to_string().replace('.', "");
        format!("{:0>width$}", digits, width = STRIKE_WIDTH)
    }

    /// Encoded option symbol, e.g. `SYM240621C00045000`.
    pub fn symbol(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}{}{}",
            self.underlying,
            self.expiration.year() % 100,
            self.expiration.month(),
            self.expiration.day(),
            self.option_type.code(),
            self.encoded_strike()
        )
    }
}

/// Round to the wire precision and reject strikes the 8-digit field cannot carry.
fn normalize_strike(strike: Decimal) -> Result<Decimal, QueryError> {
    if strike <= Decimal::ZERO {
        return Err(QueryError::InvalidIdentifier(
            "the strike price must be greater than 0".to_string(),
        ));
    }

    let rounded =
        strike.round_dp_with_strategy(STRIKE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Err(QueryError::InvalidIdentifier(format!(
            "the strike price {} rounds to 0.000",
            strike
        )));
    }

    if rounded > max_strike() {
        return Err(QueryError::InvalidIdentifier(format!(
            "the strike price {} exceeds {}",
            strike,
            max_strike()
        )));
    }

    Ok(rounded)
}

impl Display for OptionContract {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol())
    }
}

impl FromStr for OptionContract {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn contract(strike: Decimal) -> Result<OptionContract, QueryError> {
        OptionContract::new_as_of("SYM", 2024, 6, 21, OptionType::Call, strike, day(2024, 1, 2))
    }

    #[test]
    fn test_symbol_encoding() {
        let c = contract(dec!(45.0)).unwrap();
        assert_eq!(c.encoded_strike(), "00045000");
        assert_eq!(c.symbol(), "SYM240621C00045000");
        assert_eq!(c.to_string(), "SYM240621C00045000");
    }

    #[test]
    fn test_round_trip_reproduces_components() {
        let original = contract(dec!(45.0)).unwrap();
        let parsed = OptionContract::parse_as_of(&original.symbol(), day(2024, 1, 2)).unwrap();

        assert_eq!(parsed.underlying().as_str(), "SYM");
        assert_eq!(parsed.expiration_year(), 2024);
        assert_eq!(parsed.expiration_month(), 6);
        assert_eq!(parsed.expiration_day(), 21);
        assert_eq!(parsed.option_type(), OptionType::Call);
        assert_eq!(parsed.strike(), dec!(45.0));
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_strike_encoding_boundaries() {
        assert_eq!(contract(dec!(0.001)).unwrap().encoded_strike(), "00000001");
        assert_eq!(contract(dec!(99999.999)).unwrap().encoded_strike(), "99999999");
        assert_eq!(contract(dec!(1234.5)).unwrap().encoded_strike(), "01234500");
    }

    #[test]
    fn test_strike_rounds_to_three_decimals() {
        let c = contract(dec!(12.34567)).unwrap();
        assert_eq!(c.strike(), dec!(12.346));
        assert_eq!(c.encoded_strike(), "00012346");
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        for strike in [dec!(0), dec!(-5)] {
            let err = contract(strike).unwrap_err();
            assert!(matches!(err, QueryError::InvalidIdentifier(_)));
        }
    }

    #[test]
    fn test_rejects_unrepresentable_strike() {
        assert!(contract(dec!(0.0001)).is_err());
        assert!(contract(dec!(100000)).is_err());
    }

    #[test]
    fn test_two_digit_year_is_2000s() {
        let c = OptionContract::new_as_of(
            "SYM",
            24,
            6,
            21,
            OptionType::Put,
            dec!(10),
            day(2024, 1, 2),
        )
        .unwrap();
        assert_eq!(c.expiration_year(), 2024);
        assert_eq!(c.symbol(), "SYM240621P00010000");
    }

    #[test]
    fn test_range_checks() {
        let today = day(2024, 1, 2);
        for (year, month, dom) in [
            (-1, 6, 21),
            (2024, 0, 21),
            (2024, 13, 21),
            (2024, 6, 0),
            (2024, 6, 32),
        ] {
            let err = OptionContract::new_as_of(
                "SYM",
                year,
                month,
                dom,
                OptionType::Call,
                dec!(1),
                today,
            )
            .unwrap_err();
            assert!(matches!(err, QueryError::InvalidIdentifier(_)), "{year}-{month}-{dom}");
        }
    }

    #[test]
    fn test_day_in_range_but_not_in_month() {
        // Passes the 1..=31 range check, fails as a calendar date
        let err = OptionContract::new_as_of(
            "SYM",
            2024,
            4,
            31,
            OptionType::Call,
            dec!(1),
            day(2024, 1, 2),
        )
        .unwrap_err();
        match err {
            QueryError::InvalidIdentifier(message) => {
                assert!(message.contains("not a valid calendar date"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_expired_contract() {
        let err = OptionContract::new_as_of(
            "SYM",
            2024,
            6,
            21,
            OptionType::Call,
            dec!(45),
            day(2024, 6, 22),
        )
        .unwrap_err();
        match err {
            QueryError::InvalidIdentifier(message) => {
                assert_eq!(message, "the requested option expired on 21/06/2024")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_expiring_today_is_accepted() {
        let c = OptionContract::new_as_of(
            "SYM",
            2024,
            6,
            21,
            OptionType::Call,
            dec!(45),
            day(2024, 6, 21),
        );
        assert!(c.is_ok());
    }

    #[test]
    fn test_default_clock_rejects_past_dates() {
        let err = OptionContract::new("SYM", 2001, 1, 19, OptionType::Call, dec!(45)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier(_)));

        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let err = OptionContract::from_expiration("SYM", yesterday, OptionType::Put, dec!(45))
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_symbols() {
        let today = day(2024, 1, 2);
        for input in [
            "",
            "sym240621C00045000",
            "SYM240621X00045000",
            "SYM240621C4500",
            "SYM240621C000450001",
            "240621C00045000",
            " SYM240621C00045000",
        ] {
            let err = OptionContract::parse_as_of(input, today).unwrap_err();
            assert!(matches!(err, QueryError::InvalidIdentifier(_)), "{input:?}");
        }
    }

    #[test]
    fn test_parse_applies_value_checks() {
        let today = day(2024, 1, 2);
        assert!(OptionContract::parse_as_of("SYM241321C00045000", today).is_err());
        assert!(OptionContract::parse_as_of("SYM240621C00000000", today).is_err());
        assert!(OptionContract::parse_as_of("SYM230621C00045000", today).is_err());
    }

    #[test]
    fn test_from_str_uses_local_clock() {
        let next_year = Local::now().date_naive().year() + 1;
        let encoded = format!("SPY{:02}0115P00400500", next_year % 100);
        let c: OptionContract = encoded.parse().unwrap();
        assert_eq!(c.option_type(), OptionType::Put);
        assert_eq!(c.strike(), dec!(400.5));
        assert_eq!(c.symbol(), encoded);
    }
}
