use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::OutOfRange;
use crate::models::Transaction;

/// Sum of every amount. Empty ledger sums to zero.
pub(crate) fn total(transactions: &[Transaction]) -> Result<Decimal, OutOfRange> {
    transactions
        .iter()
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
        .ok_or(OutOfRange)
}

/// Budget left after all recorded expenses. Negative means overspent.
pub(crate) fn remaining(
    budget: Decimal,
    transactions: &[Transaction],
) -> Result<Decimal, OutOfRange> {
    budget.checked_sub(total(transactions)?).ok_or(OutOfRange)
}

/// Sum per exact description string, in order of first appearance.
pub(crate) fn group_by_description(
    transactions: &[Transaction],
) -> Result<Vec<(String, Decimal)>, OutOfRange> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions {
        match index.get(txn.description.as_str()) {
            Some(&i) => {
                let sum = &mut groups[i].1;
                *sum = sum.checked_add(txn.amount).ok_or(OutOfRange)?;
            }
            None => {
                index.insert(txn.description.as_str(), groups.len());
                groups.push((txn.description.clone(), txn.amount));
            }
        }
    }
    Ok(groups)
}

/// Percentage share of each group, weighted by absolute amount so that a
/// refund still occupies a slice. All-zero input gives 0% everywhere.
/// Computed in f64: shares are display-only and the weight may exceed
/// `Decimal::MAX`.
pub(crate) fn shares(groups: &[(String, Decimal)]) -> Vec<f64> {
    let weights: Vec<f64> = groups
        .iter()
        .map(|(_, amt)| amt.abs().to_f64().unwrap_or(0.0))
        .collect();
    let weight: f64 = weights.iter().sum();
    if weight == 0.0 {
        return vec![0.0; groups.len()];
    }
    weights.iter().map(|w| w / weight * 100.0).collect()
}
