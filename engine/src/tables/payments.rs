//! Payments summary table
//!
//! One row per agreement item (parcel items priced per unit, agreement-level
//! items flat per agreement) with the allocated first and subsequent payment
//! amounts and the annual value. Rows sort ascending by code (stable: items
//! sharing a code keep their source order) and a bold totals row closes the
//! table. Totals are summed from the typed pence amounts, never re-read from
//! formatted cells.

use crate::calc::{
    payment_lines, total_annual_payment, total_first_payment, total_subsequent_payment, ItemKind,
    PaymentLine,
};
use crate::currency::{format_money, format_pence};
use crate::models::PaymentPlan;
use crate::tables::{Cell, Table};

/// Build the payments summary table for a plan.
pub fn payments_summary_table(plan: &PaymentPlan) -> Table {
    let mut lines = payment_lines(plan);
    lines.sort_by(|a, b| a.code.cmp(&b.code));

    let mut data: Vec<Vec<Cell>> = lines.iter().map(line_row).collect();
    data.push(totals_row(&lines));

    Table {
        headings: vec![
            Cell::text("Action"),
            Cell::text("Code"),
            Cell::text("Annual payment rate"),
            Cell::text("First payment"),
            Cell::text("Subsequent payments"),
            Cell::text("Annual payment value"),
        ],
        data,
    }
}

fn line_row(line: &PaymentLine) -> Vec<Cell> {
    let rate = match line.kind {
        ItemKind::Parcel => {
            let unit = line.unit.as_deref().unwrap_or("");
            let unit = unit.strip_suffix('s').unwrap_or(unit);
            format!("{} per {unit}", format_money(line.rate.as_ref()))
        }
        ItemKind::AgreementLevel => {
            format!("{} per agreement", format_money(line.rate.as_ref()))
        }
    };

    vec![
        Cell::text(line.description.clone()),
        Cell::text(line.code.clone()),
        Cell::text(rate),
        Cell::text(format_pence(line.first_payment_pence)),
        Cell::text(format_pence(line.subsequent_payment_pence)),
        Cell::text(format_money(line.annual_payment.as_ref())),
    ]
}

fn totals_row(lines: &[PaymentLine]) -> Vec<Cell> {
    vec![
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::text(format_pence(total_first_payment(lines))).bold(),
        Cell::text(format_pence(total_subsequent_payment(lines))).bold(),
        Cell::text(format_pence(total_annual_payment(lines))).bold(),
    ]
}
