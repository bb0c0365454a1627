use std::path::PathBuf;
use thiserror::Error;

/// User input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Invalid amount '{0}': enter a number such as 12.50")]
    InvalidAmount(String),
    #[error("Invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),
}

/// Failure reading or writing the ledger file.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to access ledger {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse ledger: {0}")]
    Csv(#[from] csv::Error),
    #[error("Corrupt ledger row at line {line}: {reason}")]
    Format { line: u64, reason: String },
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// A sum over the ledger does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Ledger totals are out of range")]
pub(crate) struct OutOfRange;

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AddError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
