use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

use super::amount::{format_money, DATE_FORMAT};

/// One recorded expense. Never mutated once it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Date in the `YYYY-MM-DD` form used both on disk and on screen.
    pub(crate) fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// `2024-01-01, Groceries, $45.50`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.date_str(),
            self.description,
            format_money(self.amount)
        )
    }
}
