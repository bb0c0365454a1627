use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::format_money;

/// [`format_money`] with thousand separators, for the TUI cards and legend.
/// Ledger lines keep the compact form.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let plain = format_money(val);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let digits = digits.trim_start_matches('$');
    let (int_part, dec_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{sign}${with_commas}.{dec_part}")
}

/// `42.7%` with one decimal, as chart labels show it.
pub(crate) fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Whole-cent bar height for charts. Negative and oversized values clamp.
pub(crate) fn bar_value(amount: Decimal) -> u64 {
    amount
        .abs()
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.round().to_u64())
        .unwrap_or(u64::MAX)
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Shift a list's scroll offset by `delta` rows, keeping the last page full.
pub(crate) fn scroll_by(scroll: &mut usize, delta: isize, len: usize, page: usize) {
    let max = len.saturating_sub(page.max(1));
    *scroll = scroll.saturating_add_signed(delta).min(max);
}
