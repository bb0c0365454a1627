use rust_decimal::Decimal;

use super::amount::parse_amount;

/// Budget is transient user input. Anything that does not parse counts as zero.
pub(crate) fn parse_budget(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}
