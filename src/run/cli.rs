use anyhow::{Context, Result};
use std::io::Write;

use crate::error::AddError;
use crate::models::format_money;
use crate::summary;
use crate::tracker::{Breakdown, Tracker};

pub(crate) fn as_cli(args: &[String], tracker: &Tracker) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(args, tracker, &mut out)
}

fn dispatch(args: &[String], tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage(out)?;
        return Ok(());
    };
    match command.as_str() {
        "add" | "a" => cli_add(&args[2..], tracker, out),
        "list" | "ls" => cli_list(tracker, out),
        "dashboard" | "dash" => cli_dashboard(&args[2..], tracker, out),
        "breakdown" | "graph" => cli_breakdown(tracker, out),
        "path" => {
            writeln!(out, "{}", tracker.ledger_path().display())?;
            Ok(())
        }
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "expensetui {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "ExpenseTUI - personal expense ledger")?;
    writeln!(out)?;
    writeln!(out, "Usage: expensetui [--file <path>] [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                          Launch interactive TUI")?;
    writeln!(out, "  add <date> <description> <amt>  Record a transaction (date is YYYY-MM-DD)")?;
    writeln!(out, "  list, ls                        List all transactions")?;
    writeln!(out, "  dashboard, dash [budget]        Total expenses and remaining budget")?;
    writeln!(out, "  breakdown, graph                Spending grouped by description")?;
    writeln!(out, "  path                            Show the ledger file location")?;
    writeln!(out, "  --help, -h                      Show this help")?;
    writeln!(out, "  --version, -V                   Show version")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  --file, -f <path>               Use this ledger file (or set EXPENSETUI_FILE)")?;
    Ok(())
}

fn cli_add(args: &[String], tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: expensetui add <date> <description> <amount>");
    }
    let date = &args[0];
    let amount = &args[args.len() - 1];
    let description = args[1..args.len() - 1].join(" ");

    match tracker.append_transaction(date, &description, amount) {
        Ok(txn) => {
            writeln!(out, "Added: {txn}")?;
            Ok(())
        }
        Err(AddError::Validation(e)) => anyhow::bail!("{e}"),
        Err(AddError::Store(e)) => Err(e).context("Failed to save transaction"),
    }
}

fn cli_list(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let lines = tracker
        .list_transactions()
        .context("Failed to load transactions")?;
    if lines.is_empty() {
        writeln!(out, "No transactions")?;
        return Ok(());
    }
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn cli_dashboard(args: &[String], tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let budget = args.first().map(String::as_str).unwrap_or("");
    let dash = tracker
        .compute_dashboard(budget)
        .context("Failed to compute dashboard")?;
    writeln!(out, "Budget:            {}", format_money(dash.budget))?;
    writeln!(out, "Total Expenses:    {}", format_money(dash.total_expense))?;
    writeln!(out, "Remaining Budget:  {}", format_money(dash.remaining_budget))?;
    Ok(())
}

fn cli_breakdown(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let groups = match tracker
        .compute_breakdown()
        .context("Failed to compute breakdown")?
    {
        Breakdown::NoData => {
            writeln!(out, "There are no expense data to display.")?;
            return Ok(());
        }
        Breakdown::Groups(groups) => groups,
    };

    let pct = summary::shares(&groups);
    writeln!(out, "Spending by Description:")?;
    for ((name, amount), share) in groups.iter().zip(&pct) {
        writeln!(out, "  {name:<24} {:>12} {share:>6.1}%", format_money(*amount))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
