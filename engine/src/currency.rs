//! Currency formatting
//!
//! All money values are i64 (pence). Display follows the GOV.UK content
//! style for GBP: comma-grouped pounds with exactly two decimal places,
//! except that whole-pound amounts drop the trailing ".00" ("£75" rather
//! than "£75.00"; "£75.50" is unchanged).

use serde::{Deserialize, Serialize};

/// A money field as it arrives on the wire.
///
/// The agreements API normally sends integer pence, but records have been
/// observed carrying fractional values and preformatted strings such as
/// `"£1,234"`. Strings are never formatted; they pass through with
/// everything except digits, `.` and `-` stripped.
///
/// # Example
/// ```
/// use farming_agreement_core::currency::{format_money, MoneyField};
///
/// let rate = MoneyField::Pence(1060);
/// assert_eq!(format_money(Some(&rate)), "£10.60");
///
/// let raw = MoneyField::Raw("£1,234".to_string());
/// assert_eq!(format_money(Some(&raw)), "1234");
///
/// assert_eq!(format_money(None), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyField {
    /// Integer pence, the normal case
    Pence(i64),
    /// Fractional pence, rounded to the nearest penny for display
    Fractional(f64),
    /// Free text, passed through stripped rather than formatted
    Raw(String),
}

impl MoneyField {
    /// Numeric pence value of this field, if it has one.
    ///
    /// Raw strings that are plain numbers ("1234") coerce the way the
    /// upstream service coerces them when summing; strings with currency
    /// symbols or grouping commas do not.
    pub fn as_pence(&self) -> Option<i64> {
        match self {
            MoneyField::Pence(pence) => Some(*pence),
            MoneyField::Fractional(value) if value.is_finite() => Some(value.round() as i64),
            MoneyField::Fractional(_) => None,
            MoneyField::Raw(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| value.round() as i64),
        }
    }
}

impl From<i64> for MoneyField {
    fn from(pence: i64) -> Self {
        MoneyField::Pence(pence)
    }
}

/// Format integer pence as a GBP display string.
///
/// # Example
/// ```
/// use farming_agreement_core::currency::format_pence;
///
/// assert_eq!(format_pence(7500), "£75");
/// assert_eq!(format_pence(7550), "£75.50");
/// assert_eq!(format_pence(305094), "£3,050.94");
/// assert_eq!(format_pence(0), "£0");
/// ```
pub fn format_pence(pence: i64) -> String {
    let sign = if pence < 0 { "-" } else { "" };
    let abs = pence.unsigned_abs();
    let pounds = group_thousands(abs / 100);
    let minor = abs % 100;
    if minor == 0 {
        format!("{sign}£{pounds}")
    } else {
        format!("{sign}£{pounds}.{minor:02}")
    }
}

/// Format an optional wire money field.
///
/// Absent fields render as the empty string so a missing amount leaves a
/// blank cell rather than a fake zero.
pub fn format_money(value: Option<&MoneyField>) -> String {
    match value {
        None => String::new(),
        Some(MoneyField::Pence(pence)) => format_pence(*pence),
        Some(MoneyField::Fractional(value)) => {
            if value.is_finite() {
                format_pence(value.round() as i64)
            } else {
                String::new()
            }
        }
        Some(MoneyField::Raw(text)) => strip_non_numeric(text),
    }
}

/// Keep only the characters a numeric amount could contain.
fn strip_non_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Comma-group a non-negative integer ("1234567" -> "1,234,567").
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*byte as char);
    }
    out
}
