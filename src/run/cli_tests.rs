#![allow(clippy::unwrap_used)]

use super::*;
use crate::ledger::LedgerStore;

fn temp_tracker() -> (tempfile::TempDir, Tracker) {
    let dir = tempfile::tempdir().unwrap();
    let tracker = Tracker::new(LedgerStore::new(dir.path().join("transactions.csv")));
    (dir, tracker)
}

fn run(tracker: &Tracker, args: &[&str]) -> Result<String> {
    let mut argv = vec!["expensetui".to_string()];
    argv.extend(args.iter().map(|s| s.to_string()));
    let mut out = Vec::new();
    dispatch(&argv, tracker, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_prints_line() {
    let (_dir, tracker) = temp_tracker();
    let out = run(&tracker, &["add", "2024-01-01", "Groceries", "45.50"]).unwrap();
    assert_eq!(out, "Added: 2024-01-01, Groceries, $45.50\n");
}

#[test]
fn test_add_joins_multi_word_description() {
    let (_dir, tracker) = temp_tracker();
    run(&tracker, &["add", "2024-01-01", "Corner", "shop", "3"]).unwrap();
    let txns = tracker.transactions().unwrap();
    assert_eq!(txns[0].description, "Corner shop");
}

#[test]
fn test_add_description_may_look_like_a_flag() {
    let (_dir, tracker) = temp_tracker();
    let mut argv: Vec<String> = ["expensetui", "add", "2024-01-01", "-f", "5"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(crate::config::take_file_flag(&mut argv).unwrap(), None);

    let mut out = Vec::new();
    dispatch(&argv, &tracker, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Added: 2024-01-01, -f, $5.00\n");
}

#[test]
fn test_add_invalid_amount_fails_without_write() {
    let (_dir, tracker) = temp_tracker();
    let err = run(&tracker, &["add", "2024-01-01", "Coffee", "abc"]).unwrap_err();
    assert!(err.to_string().contains("Invalid amount"));
    assert!(!tracker.ledger_path().exists());
}

#[test]
fn test_add_missing_arguments() {
    let (_dir, tracker) = temp_tracker();
    assert!(run(&tracker, &["add", "2024-01-01", "Coffee"]).is_err());
}

// ── list ──────────────────────────────────────────────────────

#[test]
fn test_list_empty() {
    let (_dir, tracker) = temp_tracker();
    assert_eq!(run(&tracker, &["list"]).unwrap(), "No transactions\n");
}

#[test]
fn test_list_in_entry_order() {
    let (_dir, tracker) = temp_tracker();
    run(&tracker, &["add", "2024-01-02", "Rent", "1200.00"]).unwrap();
    run(&tracker, &["add", "2024-01-01", "Groceries", "45.50"]).unwrap();
    assert_eq!(
        run(&tracker, &["ls"]).unwrap(),
        "2024-01-02, Rent, $1200.00\n2024-01-01, Groceries, $45.50\n"
    );
}

// ── dashboard ─────────────────────────────────────────────────

#[test]
fn test_dashboard_overspent() {
    let (_dir, tracker) = temp_tracker();
    run(&tracker, &["add", "2024-01-01", "Groceries", "45.50"]).unwrap();
    run(&tracker, &["add", "2024-01-02", "Rent", "1200.00"]).unwrap();
    run(&tracker, &["add", "2024-01-02", "Groceries", "12.00"]).unwrap();

    let out = run(&tracker, &["dashboard", "1000"]).unwrap();
    assert!(out.contains("Total Expenses:    $1257.50"), "{out}");
    assert!(out.contains("Remaining Budget:  -$257.50"), "{out}");
}

#[test]
fn test_dashboard_without_budget() {
    let (_dir, tracker) = temp_tracker();
    run(&tracker, &["add", "2024-01-01", "Gas", "30"]).unwrap();
    let out = run(&tracker, &["dash"]).unwrap();
    assert!(out.contains("Budget:            $0.00"), "{out}");
    assert!(out.contains("Remaining Budget:  -$30.00"), "{out}");
}

// ── breakdown ─────────────────────────────────────────────────

#[test]
fn test_breakdown_no_data() {
    let (_dir, tracker) = temp_tracker();
    assert_eq!(
        run(&tracker, &["breakdown"]).unwrap(),
        "There are no expense data to display.\n"
    );
}

#[test]
fn test_breakdown_groups() {
    let (_dir, tracker) = temp_tracker();
    run(&tracker, &["add", "2024-01-01", "Food", "75"]).unwrap();
    run(&tracker, &["add", "2024-01-02", "Gas", "25"]).unwrap();
    let out = run(&tracker, &["graph"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Food") && lines[1].contains("$75.00") && lines[1].contains("75.0%"));
    assert!(lines[2].contains("Gas") && lines[2].contains("$25.00") && lines[2].contains("25.0%"));
}

// ── misc ──────────────────────────────────────────────────────

#[test]
fn test_path_command() {
    let (_dir, tracker) = temp_tracker();
    let out = run(&tracker, &["path"]).unwrap();
    assert_eq!(out.trim_end(), tracker.ledger_path().display().to_string());
}

#[test]
fn test_version() {
    let (_dir, tracker) = temp_tracker();
    assert!(run(&tracker, &["--version"]).unwrap().starts_with("expensetui "));
}

#[test]
fn test_unknown_command() {
    let (_dir, tracker) = temp_tracker();
    let err = run(&tracker, &["frobnicate"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: frobnicate");
}

#[test]
fn test_shellexpand_home() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    assert_eq!(
        crate::run::shellexpand("~/ledger.csv"),
        format!("{home}/ledger.csv")
    );
    assert_eq!(crate::run::shellexpand("/abs/x.csv"), "/abs/x.csv");
}
