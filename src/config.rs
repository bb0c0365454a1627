use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub(crate) const LEDGER_ENV: &str = "EXPENSETUI_FILE";
const LEDGER_FILE_NAME: &str = "transactions.csv";
const LOG_FILE_NAME: &str = "expensetui.log";

/// Where the ledger and the TUI log live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) ledger_path: PathBuf,
    pub(crate) log_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve from the `--file` flag, then `EXPENSETUI_FILE`, then the
    /// platform data directory.
    pub(crate) fn load(file_flag: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir()?;
        Ok(Self::resolve(
            file_flag,
            std::env::var_os(LEDGER_ENV),
            &data_dir,
        ))
    }

    pub(crate) fn resolve(
        file_flag: Option<PathBuf>,
        env_value: Option<OsString>,
        data_dir: &Path,
    ) -> Self {
        let ledger_path = file_flag
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join(LEDGER_FILE_NAME));
        Self {
            ledger_path,
            log_path: Some(data_dir.join(LOG_FILE_NAME)),
        }
    }
}

/// Pull a leading `--file <path>` (or `-f <path>`) out of the argument list
/// so the rest can be dispatched as a command. The flag must come before the
/// command; anything after the command belongs to it, so `add ... -f 5` keeps
/// its description words.
pub(crate) fn take_file_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    if !matches!(args.get(1).map(String::as_str), Some("--file" | "-f")) {
        return Ok(None);
    }
    if args.len() < 3 {
        anyhow::bail!("--file requires a path");
    }
    let value = args.remove(2);
    args.remove(1);
    Ok(Some(PathBuf::from(crate::run::shellexpand(&value))))
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensetui", "ExpenseTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
