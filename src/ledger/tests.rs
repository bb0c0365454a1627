#![allow(clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;

use super::*;

fn temp_store() -> (tempfile::TempDir, LedgerStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transactions.csv"));
    (dir, store)
}

fn txn(date: &str, description: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description,
        amount,
    )
}

// ── load_all ──────────────────────────────────────────────────

#[test]
fn test_missing_file_is_empty_ledger() {
    let (_dir, store) = temp_store();
    assert!(!store.path().exists());
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_load_plain_rows() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "2024-01-01,Groceries,45.5\n2024-01-02,Rent,1200.0\n",
    )
    .unwrap();

    let txns = store.load_all().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0], txn("2024-01-01", "Groceries", dec!(45.5)));
    assert_eq!(txns[1], txn("2024-01-02", "Rent", dec!(1200.0)));
}

#[test]
fn test_load_crlf_rows() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "2024-01-01,Groceries,45.5\r\n2024-01-02,Rent,10\r\n").unwrap();
    let txns = store.load_all().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[1].amount, dec!(10));
}

#[test]
fn test_load_wrong_field_count_fails() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "2024-01-01,Groceries,45.5\n2024-01-02,Rent\n2024-01-03,Gas,30\n",
    )
    .unwrap();

    match store.load_all().unwrap_err() {
        StoreError::Format { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 3 fields"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_non_numeric_amount_fails() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "2024-01-01,Groceries,lots\n").unwrap();
    match store.load_all().unwrap_err() {
        StoreError::Format { line, reason } => {
            assert_eq!(line, 1);
            assert!(reason.contains("invalid amount"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_bad_date_fails() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "01/02/2024,Groceries,4\n").unwrap();
    assert!(matches!(
        store.load_all().unwrap_err(),
        StoreError::Format { .. }
    ));
}

#[test]
fn test_load_amount_beyond_decimal_precision_fails() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "2024-01-01,Dust,0.00000000000000000000000000001\n").unwrap();
    assert!(matches!(
        store.load_all().unwrap_err(),
        StoreError::Format { line: 1, .. }
    ));
}

#[test]
fn test_load_scientific_amount() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "2024-01-01,Fee,1.5e2\n").unwrap();
    let txns = store.load_all().unwrap();
    assert_eq!(txns[0].amount, dec!(150));
}

// ── append ────────────────────────────────────────────────────

#[test]
fn test_append_creates_file() {
    let (_dir, store) = temp_store();
    store
        .append(&txn("2024-01-01", "Groceries", dec!(45.50)))
        .unwrap();
    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "2024-01-01,Groceries,45.50\n");
}

#[test]
fn test_append_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("nested").join("ledger.csv"));
    store.append(&txn("2024-01-01", "Gas", dec!(30))).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_append_then_load_roundtrip_is_last() {
    let (_dir, store) = temp_store();
    store.append(&txn("2024-01-01", "Groceries", dec!(45.50))).unwrap();
    let added = txn("2023-12-31", "Late entry", dec!(0.1));
    store.append(&added).unwrap();

    let txns = store.load_all().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns.last().unwrap(), &added);
    assert_eq!(txns.last().unwrap().amount.to_string(), "0.1");
}

#[test]
fn test_append_preserves_entry_order_not_date_order() {
    let (_dir, store) = temp_store();
    store.append(&txn("2024-03-01", "C", dec!(3))).unwrap();
    store.append(&txn("2024-01-01", "A", dec!(1))).unwrap();
    store.append(&txn("2024-02-01", "B", dec!(2))).unwrap();

    let descriptions: Vec<String> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|t| t.description)
        .collect();
    assert_eq!(descriptions, vec!["C", "A", "B"]);
}

#[test]
fn test_append_accepts_duplicates() {
    let (_dir, store) = temp_store();
    let t = txn("2024-01-01", "Coffee", dec!(4));
    store.append(&t).unwrap();
    store.append(&t).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn test_append_quotes_description_with_comma() {
    let (_dir, store) = temp_store();
    let t = txn("2024-01-01", "Food, drinks", dec!(12.00));
    store.append(&t).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "2024-01-01,\"Food, drinks\",12.00\n");
    assert_eq!(store.load_all().unwrap(), vec![t]);
}

#[test]
fn test_append_after_missing_trailing_newline() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "2024-01-01,Groceries,45.5").unwrap();
    store.append(&txn("2024-01-02", "Rent", dec!(1200))).unwrap();

    let txns = store.load_all().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[1].description, "Rent");
}

#[test]
fn test_append_negative_amount_roundtrip() {
    let (_dir, store) = temp_store();
    let t = txn("2024-05-05", "Refund", dec!(-19.99));
    store.append(&t).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![t]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_append_write_failure_is_access_error() {
    // Large enough to overflow the csv writer's buffer inside write_record.
    let store = LedgerStore::new("/dev/full");
    let description = "x".repeat(20_000);
    let err = store
        .append(&txn("2024-01-01", &description, dec!(1)))
        .unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Failed to access ledger /dev/full"));
}
