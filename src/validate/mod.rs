use crate::error::ValidationError;
use crate::models::{parse_amount, parse_date, Transaction};

/// Turn raw form input into a storable transaction.
///
/// The description is kept exactly as typed (no trimming) because it doubles
/// as the grouping key. Checks run description, amount, then date, and the
/// first failure wins.
pub(crate) fn validate_entry(
    date: &str,
    description: &str,
    amount: &str,
) -> Result<Transaction, ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let amount_value =
        parse_amount(amount).ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()))?;
    let date_value = parse_date(date).ok_or_else(|| ValidationError::InvalidDate(date.to_string()))?;
    Ok(Transaction::new(date_value, description, amount_value))
}

#[cfg(test)]
mod tests;
