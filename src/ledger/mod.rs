use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{parse_amount, parse_date, Transaction};

const FIELD_COUNT: usize = 3;

/// Append-only ledger file: one `date,description,amount` row per transaction,
/// no header. Every call opens, fully reads or writes, and closes the file.
#[derive(Debug, Clone)]
pub(crate) struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Write one record at the end of the file, creating it (and its parent
    /// directory) on first use. No deduplication happens here.
    pub(crate) fn append(&self, txn: &Transaction) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;

        if !ends_with_newline(&mut file).map_err(|e| self.io_err(e))? {
            file.write_all(b"\n").map_err(|e| self.io_err(e))?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        let date = txn.date_str();
        let amount = txn.amount.to_string();
        wtr.write_record([date.as_str(), txn.description.as_str(), amount.as_str()])
            .map_err(|e| self.io_err(e.into()))?;
        wtr.flush().map_err(|e| self.io_err(e))?;

        info!(date = %date, description = %txn.description, amount = %amount, "appended transaction");
        Ok(())
    }

    /// Read every record in append order. A missing file is an empty ledger.
    /// The first malformed row aborts the whole read.
    pub(crate) fn load_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger not found, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut transactions = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let txn = parse_record(&record).map_err(|reason| {
                warn!(line, %reason, "corrupt ledger row");
                StoreError::Format { line, reason }
            })?;
            transactions.push(txn);
        }

        debug!(count = transactions.len(), "loaded ledger");
        Ok(transactions)
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::io(&self.path, source)
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<Transaction, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        ));
    }
    let date_raw = &record[0];
    let description = &record[1];
    let amount_raw = &record[2];

    let date = parse_date(date_raw).ok_or_else(|| format!("invalid date '{date_raw}'"))?;
    let amount =
        parse_amount(amount_raw).ok_or_else(|| format!("invalid amount '{amount_raw}'"))?;
    Ok(Transaction::new(date, description, amount))
}

/// True for an empty file, or one whose last byte is a line break.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests;
