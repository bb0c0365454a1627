use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a plain decimal numeral (optional sign, surrounding whitespace ignored).
/// Numerals with more precision than a `Decimal` holds are rejected rather
/// than rounded. Scientific notation is accepted as a fallback so files
/// written by float-based tools (`1e-05`) still load.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => (value.scale() as usize == fraction_digits(trimmed)).then_some(value),
        Err(_) => Decimal::from_scientific(trimmed).ok(),
    }
}

fn fraction_digits(numeral: &str) -> usize {
    numeral
        .split_once('.')
        .map_or(0, |(_, frac)| frac.chars().filter(char::is_ascii_digit).count())
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// `$12.50`, `-$3.00`. No thousands separators; the ledger line format keeps
/// amounts compact.
pub(crate) fn format_money(val: Decimal) -> String {
    let rounded = val.round_dp(2);
    if rounded < Decimal::ZERO {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}
