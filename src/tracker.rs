use rust_decimal::Decimal;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{AddError, StoreError};
use crate::ledger::LedgerStore;
use crate::models::{parse_budget, Transaction};
use crate::summary;
use crate::validate::validate_entry;

/// Totals shown on the dashboard for one budget value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dashboard {
    pub(crate) budget: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) remaining_budget: Decimal,
}

/// Per-description sums, or the signal that there is nothing to chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Breakdown {
    #[default]
    NoData,
    Groups(Vec<(String, Decimal)>),
}

impl Breakdown {
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Entry points used by the CLI and TUI. Holds nothing but the store location;
/// every query re-reads the ledger file.
pub(crate) struct Tracker {
    store: LedgerStore,
}

impl Tracker {
    pub(crate) fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    pub(crate) fn ledger_path(&self) -> &Path {
        self.store.path()
    }

    /// Validate and append. Nothing is written when validation fails.
    pub(crate) fn append_transaction(
        &self,
        date: &str,
        description: &str,
        amount: &str,
    ) -> Result<Transaction, AddError> {
        let txn = validate_entry(date, description, amount).inspect_err(|e| {
            debug!(error = %e, "rejected transaction input");
        })?;
        self.store.append(&txn)?;
        Ok(txn)
    }

    pub(crate) fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        self.store.load_all()
    }

    pub(crate) fn list_transactions(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .transactions()?
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    pub(crate) fn compute_dashboard(&self, budget: &str) -> Result<Dashboard, StoreError> {
        let txns = self.transactions()?;
        let budget = parse_budget(budget);
        let dashboard = Dashboard {
            budget,
            total_expense: summary::total(&txns)?,
            remaining_budget: summary::remaining(budget, &txns)?,
        };
        info!(
            total = %dashboard.total_expense,
            remaining = %dashboard.remaining_budget,
            "computed dashboard"
        );
        Ok(dashboard)
    }

    pub(crate) fn compute_breakdown(&self) -> Result<Breakdown, StoreError> {
        let groups = summary::group_by_description(&self.transactions()?)?;
        if groups.is_empty() {
            return Ok(Breakdown::NoData);
        }
        Ok(Breakdown::Groups(groups))
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
