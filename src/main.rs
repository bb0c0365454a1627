mod config;
mod error;
mod ledger;
mod logging;
mod models;
mod run;
mod summary;
mod tracker;
mod ui;
mod validate;

use anyhow::Result;

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let file_flag = config::take_file_flag(&mut args)?;
    let settings = config::Settings::load(file_flag)?;
    let tracker = tracker::Tracker::new(ledger::LedgerStore::new(&settings.ledger_path));

    match args.len() {
        0 | 1 => {
            logging::init_for_tui(settings.log_path.as_deref());
            run::as_tui(&tracker)
        }
        _ => {
            logging::init_for_cli();
            run::as_cli(&args, &tracker)
        }
    }
}
