use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// One-shot commands log warnings to stderr, leaving stdout for output.
pub(crate) fn init_for_cli() {
    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(filter("expensetui=warn"))
            .with_writer(std::io::stderr)
            .init();
    });
}

/// The TUI owns the terminal, so logs go to a file. If it cannot be opened
/// logging stays off.
pub(crate) fn init_for_tui(log_path: Option<&Path>) {
    TRACING_INIT.call_once(|| {
        let Some(path) = log_path else {
            return;
        };
        let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };
        fmt()
            .with_env_filter(filter("expensetui=info"))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    });
}
