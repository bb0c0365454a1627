#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_valid_entry() {
    let txn = validate_entry("2024-01-01", "Groceries", "45.50").unwrap();
    assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(txn.description, "Groceries");
    assert_eq!(txn.amount, dec!(45.50));
}

#[test]
fn test_empty_description_rejected() {
    let err = validate_entry("2024-01-01", "", "45.50").unwrap_err();
    assert_eq!(err, ValidationError::EmptyDescription);
}

#[test]
fn test_description_not_trimmed() {
    let txn = validate_entry("2024-01-01", " Rent ", "10").unwrap();
    assert_eq!(txn.description, " Rent ");
}

#[test]
fn test_whitespace_description_is_kept() {
    // Only a truly empty description is rejected.
    assert!(validate_entry("2024-01-01", " ", "10").is_ok());
}

#[test]
fn test_bad_amount_rejected() {
    let err = validate_entry("2024-01-01", "Coffee", "abc").unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount("abc".into()));
}

#[test]
fn test_empty_amount_rejected() {
    let err = validate_entry("2024-01-01", "Coffee", "").unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount(String::new()));
}

#[test]
fn test_bad_date_rejected() {
    let err = validate_entry("2024-02-30", "Coffee", "3.00").unwrap_err();
    assert_eq!(err, ValidationError::InvalidDate("2024-02-30".into()));
}

#[test]
fn test_wrong_date_format_rejected() {
    let err = validate_entry("01/15/2024", "Coffee", "3.00").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDate(_)));
}

#[test]
fn test_amount_checked_before_date() {
    let err = validate_entry("nope", "Coffee", "nope").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidAmount(_)));
}

#[test]
fn test_negative_amount_allowed() {
    let txn = validate_entry("2024-01-01", "Refund", "-20").unwrap();
    assert_eq!(txn.amount, dec!(-20));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ValidationError::InvalidDate("x".into()).to_string(),
        "Invalid date 'x': use YYYY-MM-DD"
    );
    assert_eq!(
        ValidationError::EmptyDescription.to_string(),
        "Description must not be empty"
    );
}

#[test]
fn test_amount_beyond_decimal_precision_rejected() {
    let raw = "0.00000000000000000000000000001";
    let err = validate_entry("2024-01-01", "Dust", raw).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount(raw.into()));
}
