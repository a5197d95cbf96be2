//! Annual payment schedule pivot
//!
//! Every payment-event line item is folded into a code x calendar-year
//! matrix of summed pence. Years order ascending; codes order numeric-aware
//! ("A2" before "A10"). A final "Total" row carries per-year and grand
//! totals. Line items whose referenced item has no resolvable code are
//! skipped, as are events whose payment date does not parse.

use std::collections::{BTreeMap, BTreeSet};

use crate::calc::natural_code_cmp;
use crate::currency::format_pence;
use crate::dates::record_date_year;
use crate::models::{LineItem, PaymentPlan};
use crate::tables::{Cell, Table};

#[derive(Default)]
struct CodeYears {
    years: BTreeMap<i32, i64>,
    total: i64,
}

/// Build the code x year schedule table for a plan.
pub fn annual_payment_schedule_table(plan: &PaymentPlan) -> Table {
    let mut by_code: BTreeMap<String, CodeYears> = BTreeMap::new();

    for event in &plan.payments {
        let Some(year) = event.payment_date.as_deref().and_then(record_date_year) else {
            continue;
        };
        for line in &event.line_items {
            let Some(code) = resolve_line_code(plan, line) else {
                continue;
            };
            let entry = by_code.entry(code.to_string()).or_default();
            *entry.years.entry(year).or_insert(0) += line.payment_pence;
            entry.total += line.payment_pence;
        }
    }

    let years: BTreeSet<i32> = by_code
        .values()
        .flat_map(|code_years| code_years.years.keys().copied())
        .collect();

    let mut codes: Vec<&String> = by_code.keys().collect();
    codes.sort_by(|a, b| natural_code_cmp(a, b));

    let mut data = Vec::with_capacity(codes.len() + 1);
    let mut year_totals: BTreeMap<i32, i64> = BTreeMap::new();
    let mut grand_total: i64 = 0;

    for code in codes {
        let code_years = &by_code[code];
        let mut row = vec![Cell::text(code.clone())];
        for year in &years {
            let amount = code_years.years.get(year).copied().unwrap_or(0);
            row.push(Cell::text(format_pence(amount)));
            *year_totals.entry(*year).or_insert(0) += amount;
        }
        row.push(Cell::text(format_pence(code_years.total)));
        grand_total += code_years.total;
        data.push(row);
    }

    let mut totals_row = vec![Cell::text("Total")];
    for year in &years {
        let total = year_totals.get(year).copied().unwrap_or(0);
        totals_row.push(Cell::text(format_pence(total)));
    }
    totals_row.push(Cell::text(format_pence(grand_total)));
    data.push(totals_row);

    let mut headings = vec![Cell::text("Code")];
    for year in &years {
        headings.push(Cell::int(i64::from(*year)));
    }
    headings.push(Cell::text("Total payment"));

    Table { headings, data }
}

/// Code of the item a line references; the agreement-level reference wins
/// when a malformed line somehow carries both.
fn resolve_line_code<'a>(plan: &'a PaymentPlan, line: &LineItem) -> Option<&'a str> {
    let agreement_code = line
        .agreement_level_item_id
        .and_then(|id| plan.agreement_level_items.get(&id))
        .and_then(|item| item.code.as_deref());
    let parcel_code = || {
        line.parcel_item_id
            .and_then(|id| plan.parcel_items.get(&id))
            .and_then(|item| item.code.as_deref())
    };
    agreement_code
        .or_else(parcel_code)
        .filter(|code| !code.is_empty())
}
