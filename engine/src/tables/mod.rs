//! Table view structures
//!
//! The template layer consumes `{headings, data}` objects whose cells are
//! `{text, attributes?}`. Cell text keeps the wire distinction between
//! strings and numbers: year headings and land quantities are numeric,
//! everything else is a string. `attributes` is passed verbatim to the
//! renderer as a style hint.

pub mod actions;
pub mod annual;
pub mod land;
pub mod payments;
pub mod schedule;

// Re-exports
pub use actions::{agreement_actions_table, offer_actions_table};
pub use annual::{additional_annual_payments, AnnualPayment};
pub use land::land_summary_table;
pub use payments::payments_summary_table;
pub use schedule::annual_payment_schedule_table;

use std::fmt;

use serde::{Deserialize, Serialize};

/// GOV.UK utility class marking a cell bold (the totals row).
pub const FONT_WEIGHT_BOLD_CLASS: &str = "govuk-!-font-weight-bold";

/// Inline style keeping parcel references on one line.
pub const NOWRAP_STYLE: &str = "white-space: nowrap";

/// A cell value: string or number, serialized as whatever it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Optional style hints attached to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One table cell.
///
/// # Example
/// ```
/// use farming_agreement_core::tables::Cell;
///
/// let cell = Cell::text("£3,050.94").bold();
/// assert_eq!(
///     serde_json::to_value(&cell).unwrap(),
///     serde_json::json!({
///         "text": "£3,050.94",
///         "attributes": {"class": "govuk-!-font-weight-bold"}
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CellAttributes>,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell {
            text: CellValue::Text(value.into()),
            attributes: None,
        }
    }

    /// Numeric cell; integral values serialize without a decimal point.
    pub fn number(value: f64) -> Self {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        let text = if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT {
            CellValue::Int(value as i64)
        } else {
            CellValue::Float(value)
        };
        Cell {
            text,
            attributes: None,
        }
    }

    pub fn int(value: i64) -> Self {
        Cell {
            text: CellValue::Int(value),
            attributes: None,
        }
    }

    pub fn empty() -> Self {
        Cell::text("")
    }

    /// Mark the cell bold (totals).
    pub fn bold(mut self) -> Self {
        self.attributes
            .get_or_insert_with(CellAttributes::default)
            .class = Some(FONT_WEIGHT_BOLD_CLASS.to_string());
        self
    }

    /// Keep the cell on one line (parcel references).
    pub fn nowrap(mut self) -> Self {
        self.attributes
            .get_or_insert_with(CellAttributes::default)
            .style = Some(NOWRAP_STYLE.to_string());
        self
    }
}

/// A `{headings, data}` table for the template layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub headings: Vec<Cell>,
    pub data: Vec<Vec<Cell>>,
}

/// Round to 4 decimal places the way quantities are displayed.
pub(crate) fn round_dp4(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10_000.0).round() / 10_000.0
}
