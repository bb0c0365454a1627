mod amount;
mod budget;
mod transaction;

pub(crate) use amount::{format_money, parse_amount, parse_date};
pub(crate) use budget::parse_budget;
pub(crate) use transaction::Transaction;
