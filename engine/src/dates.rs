//! Date handling for agreement records
//!
//! Agreement and payment dates arrive as ISO strings (`"2026-01-01"`, with
//! full timestamps on some audit fields). Parsing is lenient: anything that
//! does not parse yields `None` and the caller falls back to a placeholder
//! rather than failing the whole page.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Parse a wire date string.
///
/// Accepts plain ISO dates and ISO timestamps (the date prefix is used).
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Calendar year of a wire date, for the annual schedule pivot.
pub fn record_date_year(raw: &str) -> Option<i32> {
    parse_record_date(raw).map(|date| date.year())
}

/// Long display form: "1 January 2026" (day without leading zero).
pub fn format_long_date(raw: &str) -> Option<String> {
    parse_record_date(raw).map(|date| date.format("%-d %B %Y").to_string())
}

/// Short display form: "01/01/2026".
pub fn format_short_date(raw: &str) -> Option<String> {
    parse_record_date(raw).map(|date| date.format("%d/%m/%Y").to_string())
}

/// First quarterly payment date for an agreement start date.
///
/// The first payment lands 3 calendar months plus 5 days after the start
/// date and is shown as month and year only. Month arithmetic clamps at
/// month ends before the days are added. Unparseable input yields the
/// empty string.
///
/// # Example
/// ```
/// use farming_agreement_core::dates::first_payment_date;
///
/// assert_eq!(first_payment_date("2025-09-01"), "December 2025");
/// assert_eq!(first_payment_date("not a date"), "");
/// ```
pub fn first_payment_date(agreement_start_date: &str) -> String {
    parse_record_date(agreement_start_date)
        .and_then(|date| date.checked_add_months(Months::new(3)))
        .and_then(|date| date.checked_add_days(Days::new(5)))
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_default()
}
