//! Action summary tables
//!
//! Two variants exist, one per page. The offer-review table flattens the
//! applied-for actions of each land parcel with a duration label. The
//! agreement-view table lists the priced parcel items with the agreement's
//! start and end dates, which stay redacted until the agreement is binding.

use crate::calc::{code_descriptions, strip_code_prefix};
use crate::dates::format_short_date;
use crate::models::Agreement;
use crate::pages::redact::REDACTED_PLACEHOLDER;
use crate::tables::{round_dp4, Cell, Table};

/// Actions summary for the offer-review page.
///
/// One row per action applied for on each parcel:
/// action description (resolved by code), code, land parcel reference,
/// quantity to 4 decimal places, duration label.
pub fn offer_actions_table(agreement: &Agreement) -> Table {
    let descriptions = code_descriptions(&agreement.payment);

    let mut data = Vec::new();
    for parcel in &agreement.application.parcel {
        let parcel_ref = format!(
            "{} {}",
            parcel.sheet_id.as_deref().unwrap_or(""),
            parcel.parcel_id.as_deref().unwrap_or("")
        );
        for action in &parcel.actions {
            let code = action.code.as_deref().unwrap_or("");
            data.push(vec![
                Cell::text(descriptions.get(code).cloned().unwrap_or_default()),
                Cell::text(code),
                Cell::text(parcel_ref.clone()),
                Cell::number(round_dp4(action.applied_for.quantity)),
                Cell::text(format_duration_years(action.duration_years)),
            ]);
        }
    }

    Table {
        headings: vec![
            Cell::text("Action"),
            Cell::text("Code"),
            Cell::text("Land parcel"),
            Cell::text("Quantity (ha)"),
            Cell::text("Duration"),
        ],
        data,
    }
}

/// Actions summary for the agreement-view page.
///
/// One row per priced parcel item, carrying the agreement's start and end
/// dates. The dates are redacted unless the agreement is binding; dates that
/// fail to parse also render as the placeholder.
pub fn agreement_actions_table(agreement: &Agreement) -> Table {
    let plan = &agreement.payment;
    let start_date = display_row_date(agreement, plan.agreement_start_date.as_deref());
    let end_date = display_row_date(agreement, plan.agreement_end_date.as_deref());

    let data = plan
        .parcel_items
        .values()
        .map(|item| {
            let code = item.code.as_deref().unwrap_or("");
            vec![
                Cell::text(format!(
                    "{} {}",
                    item.sheet_id.as_deref().unwrap_or(""),
                    item.parcel_id.as_deref().unwrap_or("")
                ))
                .nowrap(),
                Cell::text(code),
                Cell::text(strip_code_prefix(code, item.description.as_deref().unwrap_or(""))),
                Cell::number(item.quantity),
                Cell::text(start_date.clone()),
                Cell::text(end_date.clone()),
            ]
        })
        .collect();

    Table {
        headings: vec![
            Cell::text("Parcel"),
            Cell::text("Code"),
            Cell::text("Action"),
            Cell::text("Total parcel area (ha)"),
            Cell::text("Start date"),
            Cell::text("End date"),
        ],
        data,
    }
}

fn display_row_date(agreement: &Agreement, raw: Option<&str>) -> String {
    if !agreement.status.is_binding() {
        return REDACTED_PLACEHOLDER.to_string();
    }
    raw.and_then(format_short_date)
        .unwrap_or_else(|| REDACTED_PLACEHOLDER.to_string())
}

/// Duration label for an action: "1 year", "3 years", "0 years" when the
/// duration is missing or unparseable.
fn format_duration_years(years: f64) -> String {
    let years = if years.is_finite() { years } else { 0.0 };
    if years == 1.0 {
        "1 year".to_string()
    } else if years.fract() == 0.0 {
        format!("{} years", years as i64)
    } else {
        format!("{years} years")
    }
}
