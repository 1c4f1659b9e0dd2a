//! Brazilian real price parsing and formatting using decimal arithmetic.
//!
//! Prices reach the storefront as display text captured from product cards
//! (e.g. `"R$ 1.200,90"`). [`parse_currency`] turns that text into a
//! [`Decimal`] and [`format_currency`] renders an amount back in the pt-BR
//! convention. Parsing never fails: text that is missing or cannot be read
//! as a number is worth zero.
//!
//! ```
//! use game_mania_core::{format_currency, parse_currency};
//! use rust_decimal::Decimal;
//!
//! let amount = parse_currency(Some("R$ 1.200,90"));
//! assert_eq!(amount, Decimal::new(120_090, 2));
//! assert_eq!(format_currency(amount), "R$ 1.200,90");
//! ```

use core::fmt;
use core::iter::{Sum, from_fn};
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency symbol placed before every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

const GROUPING_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const DECIMAL_PLACES: u32 = 2;

/// Parse localized price text into an amount.
///
/// Removes the `R$` symbol and every `.` grouping separator, turns the
/// first `,` into the decimal point and reads the longest numeric prefix
/// of what remains. `None`, an empty string or anything without a leading
/// number yields zero.
///
/// Exponents are not read: `"1e3"` is worth `1`, not `1000`. A number too
/// large for [`Decimal`] is worth zero as well.
#[must_use]
pub fn parse_currency(text: Option<&str>) -> Decimal {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Decimal::ZERO;
    };

    let cleaned = text
        .replacen(CURRENCY_SYMBOL, "", 1)
        .replace(GROUPING_SEPARATOR, "")
        .replacen(DECIMAL_SEPARATOR, ".", 1);

    leading_number(cleaned.trim())
        .and_then(|number| Decimal::from_str(&number).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Format an amount as pt-BR currency text, e.g. `R$ 1.234,56`.
///
/// Amounts are rounded to two decimal places, midpoints away from zero.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL} {}{DECIMAL_SEPARATOR}{fraction}",
        group_thousands(integer)
    )
}

/// Extract a normalized numeric prefix: optional sign, integer digits and
/// an optional fraction. Returns `None` when no digit is present.
fn leading_number(text: &str) -> Option<String> {
    let mut chars = text.chars().peekable();
    let mut number = String::new();

    if chars.next_if_eq(&'-').is_some() {
        number.push('-');
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
    } else if chars.next_if_eq(&'+').is_some() {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    let integer: String = from_fn(|| chars.next_if(char::is_ascii_digit)).collect();
    let fraction: String = if chars.next_if_eq(&'.').is_some() {
        from_fn(|| chars.next_if(char::is_ascii_digit)).collect()
    } else {
        String::new()
    };

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    number.push_str(if integer.is_empty() { "0" } else { &integer });
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(&fraction);
    }
    Some(number)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// A price in Brazilian reais.
///
/// Displays in the storefront's pt-BR format and sums like a number, so a
/// cart total is just `items.map(Price::parse).sum()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from an amount in reais.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in centavos.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, DECIMAL_PLACES))
    }

    /// Leniently parse display text; see [`parse_currency`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(parse_currency(Some(text)))
    }

    /// The amount in reais.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}

/// Saturates at [`Decimal::MAX`] / [`Decimal::MIN`] instead of overflowing.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_simple_price() {
        assert_eq!(parse_currency(Some("R$ 10,00")), dec("10"));
        assert_eq!(parse_currency(Some("R$ 5,50")), dec("5.5"));
    }

    #[test]
    fn test_parse_grouped_price() {
        assert_eq!(parse_currency(Some("R$ 1.200,90")), dec("1200.90"));
        assert_eq!(parse_currency(Some("R$ 12.345.678,01")), dec("12345678.01"));
    }

    #[test]
    fn test_parse_missing_text_is_zero() {
        assert_eq!(parse_currency(None), Decimal::ZERO);
        assert_eq!(parse_currency(Some("")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_currency(Some("Grátis")), Decimal::ZERO);
        assert_eq!(parse_currency(Some("R$")), Decimal::ZERO);
        assert_eq!(parse_currency(Some("R$ ,")), Decimal::ZERO);
        assert_eq!(parse_currency(Some("-")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_reads_leading_number_only() {
        assert_eq!(parse_currency(Some("R$ 99,90 à vista")), dec("99.90"));
        assert_eq!(parse_currency(Some("R$ 7,5x")), dec("7.5"));
    }

    #[test]
    fn test_parse_non_breaking_space() {
        assert_eq!(parse_currency(Some("R$\u{a0}150,00")), dec("150"));
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(parse_currency(Some("42")), dec("42"));
        assert_eq!(parse_currency(Some(",5")), dec("0.5"));
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_currency(dec("5.5")), "R$ 5,50");
        assert_eq!(format_currency(dec("150")), "R$ 150,00");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_currency(dec("1000")), "R$ 1.000,00");
        assert_eq!(format_currency(dec("1234567.89")), "R$ 1.234.567,89");
        assert_eq!(format_currency(dec("999999.99")), "R$ 999.999,99");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("0.005")), "R$ 0,01");
        assert_eq!(format_currency(dec("10.994")), "R$ 10,99");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(dec("-12.3")), "-R$ 12,30");
        assert_eq!(format_currency(dec("-0.001")), "R$ 0,00");
    }

    #[test]
    fn test_parse_inverts_format() {
        for value in ["0", "0.01", "9.99", "10", "15.50", "1000", "1234.56", "98765432.10"] {
            let amount = dec(value);
            assert_eq!(parse_currency(Some(&format_currency(amount))), amount, "{value}");
        }
    }

    #[test]
    fn test_price_sum_and_display() {
        let total: Price = ["R$ 10,00", "R$ 5,50"].into_iter().map(Price::parse).sum();
        assert_eq!(total.amount(), dec("15.50"));
        assert_eq!(total.to_string(), "R$ 15,50");
    }

    #[test]
    fn test_price_sum_saturates() {
        let huge = "R$ 79.228.162.514.264.337.593.543.950.335,00";
        assert_eq!(parse_currency(Some(huge)), Decimal::MAX);

        let total: Price = [huge, huge, "R$ 1,00"].into_iter().map(Price::parse).sum();
        assert_eq!(total.amount(), Decimal::MAX);
        assert!(total.to_string().starts_with("R$ 79.228.162"));
    }

    #[test]
    fn test_parse_ignores_exponent() {
        assert_eq!(parse_currency(Some("1e3")), dec("1"));
    }

    #[test]
    fn test_price_from_cents() {
        assert_eq!(Price::from_cents(15_000).to_string(), "R$ 150,00");
        assert_eq!(Price::from_cents(0), Price::ZERO);
    }
}
