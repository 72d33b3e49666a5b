//! Money utilities using rust_decimal for precision
//!
//! Prices are parsed from user text, rounded once to two decimal places
//! and kept as `Decimal` from then on. Nothing here goes through `f64`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ReceiptResult, ValidationError};

/// Fraction digits kept for every stored amount
pub const DECIMAL_PLACES: u32 = 2;

/// Largest accepted item price, `999999999.99`
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// Parse user-entered price text into a two-decimal amount
///
/// Accepts plain decimals (`"3"`, `"2.5"`, `".75"`) and scientific
/// notation (`"1e2"`). Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`ValidationError::InvalidPrice`] for empty or non-numeric text, or
///   a value above [`MAX_PRICE`]
/// - [`ValidationError::NegativePrice`] for values below zero
pub fn parse_price(raw: &str) -> ReceiptResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }

    let value =
        parse_decimal(trimmed).ok_or_else(|| ValidationError::InvalidPrice(raw.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativePrice(trimmed.to_string()));
    }

    if value > MAX_PRICE {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }

    let rounded = round_money(value);

    Ok(rounded)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if !is_decimal_literal(s) {
        return None;
    }
    Decimal::from_str(s).ok().or_else(|| {
        if s.contains(['e', 'E']) {
            Decimal::from_scientific(s).ok()
        } else {
            None
        }
    })
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit
///
/// `Decimal::from_str` skips `_` separators, so the grammar is checked first.
fn is_decimal_literal(s: &str) -> bool {
    fn digits(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let int_len = digits(unsigned);
    let mut rest = &unsigned[int_len..];
    let mut frac_len = 0;
    if let Some(frac) = rest.strip_prefix('.') {
        frac_len = digits(frac);
        rest = &frac[frac_len..];
    }
    if int_len + frac_len == 0 {
        return false;
    }

    match rest.strip_prefix(['e', 'E']) {
        None => rest.is_empty(),
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && digits(exp) == exp.len()
        }
    }
}

/// Round to two decimal places (half away from zero) and fix the scale at 2
///
/// `2.5` becomes `2.50`, `1.005` becomes `1.01`, `-0` becomes `0.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Format an amount with exactly two fraction digits (no currency symbol)
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Format an amount as a dollar string, e.g. `$5.50`
pub fn format_dollars(value: Decimal) -> String {
    format!("${}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_price_pads_to_two_places() {
        assert_eq!(parse_price("2.5").unwrap().to_string(), "2.50");
        assert_eq!(parse_price("3").unwrap().to_string(), "3.00");
        assert_eq!(parse_price("0").unwrap().to_string(), "0.00");
        assert_eq!(parse_price(" 4.20 ").unwrap().to_string(), "4.20");
    }

    #[test]
    fn test_parse_price_rounds_half_away_from_zero() {
        assert_eq!(parse_price("1.005").unwrap(), dec("1.01"));
        assert_eq!(parse_price("1.004").unwrap(), dec("1.00"));
        assert_eq!(parse_price("19.999").unwrap().to_string(), "20.00");
    }

    #[test]
    fn test_parse_price_scientific() {
        assert_eq!(parse_price("1e2").unwrap().to_string(), "100.00");
        assert_eq!(parse_price("2.5e-1").unwrap().to_string(), "0.25");
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        for raw in [
            "", "   ", "abc", "12abc", "$3", "NaN", "Infinity", "1,50", "1_000", "1__0", "_1",
            ".", "1.2.3", "1e", "e5", "+-1", "1 000",
        ] {
            assert!(
                matches!(parse_price(raw), Err(ValidationError::InvalidPrice(_))),
                "expected InvalidPrice for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_price_caps_at_max() {
        assert_eq!(MAX_PRICE.to_string(), "999999999.99");
        assert_eq!(parse_price("999999999.99").unwrap(), MAX_PRICE);
        for raw in ["1000000000", "792281625142643375935439503.35", "1e30"] {
            assert!(
                matches!(parse_price(raw), Err(ValidationError::InvalidPrice(_))),
                "expected InvalidPrice for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_price_accepts_signs_and_bare_fraction() {
        assert_eq!(parse_price("+2").unwrap().to_string(), "2.00");
        assert_eq!(parse_price(".75").unwrap().to_string(), "0.75");
        assert_eq!(parse_price("1E+1").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        assert_eq!(
            parse_price("-1"),
            Err(ValidationError::NegativePrice("-1".to_string()))
        );
        assert!(matches!(
            parse_price("-0.001"),
            Err(ValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let price = parse_price("-0").unwrap();
        assert_eq!(price.to_string(), "0.00");
        assert!(!price.is_sign_negative());
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(dec("5.5")), "$5.50");
        assert_eq!(format_dollars(Decimal::ZERO), "$0.00");
        assert_eq!(format_amount(dec("1234.567")), "1234.57");
    }
}
