//! Payment allocation
//!
//! A payment event distributes money across the agreement's items, one line
//! per item. These lookups answer "how much of this event belongs to item
//! X", returning 0 when the event or the line is missing: a degraded cell,
//! never an error.

use serde::Serialize;

use crate::calc::descriptions::strip_code_prefix;
use crate::currency::MoneyField;
use crate::models::{ItemId, PaymentEvent, PaymentPlan};

/// Which item map a line-item foreign key points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Parcel,
    AgreementLevel,
}

/// Amount (pence) an event pays towards one item, 0 if absent.
///
/// # Example
/// ```
/// use farming_agreement_core::calc::{payment_for_item, ItemKind};
/// use farming_agreement_core::models::PaymentEvent;
///
/// let event: PaymentEvent = serde_json::from_value(serde_json::json!({
///     "paymentDate": "2026-04-06",
///     "lineItems": [{"parcelItemId": 1, "paymentPence": 1263}]
/// }))
/// .unwrap();
///
/// assert_eq!(payment_for_item(Some(&event), 1, ItemKind::Parcel), 1263);
/// assert_eq!(payment_for_item(Some(&event), 2, ItemKind::Parcel), 0);
/// assert_eq!(payment_for_item(None, 1, ItemKind::Parcel), 0);
/// ```
pub fn payment_for_item(event: Option<&PaymentEvent>, item_id: ItemId, kind: ItemKind) -> i64 {
    let Some(event) = event else {
        return 0;
    };
    event
        .line_items
        .iter()
        .find(|line| match kind {
            ItemKind::Parcel => line.parcel_item_id == Some(item_id),
            ItemKind::AgreementLevel => line.agreement_level_item_id == Some(item_id),
        })
        .map(|line| line.payment_pence)
        .unwrap_or(0)
}

/// One agreement item flattened with its allocated payment amounts.
///
/// This is the typed intermediate behind the payments summary table: totals
/// are summed from these pence fields, never re-read from formatted cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    pub code: String,
    pub kind: ItemKind,
    /// Verbatim for parcel items; prefix-stripped for agreement-level items.
    pub description: String,
    /// Per-unit rate for parcel items, the flat annual amount for
    /// agreement-level items.
    pub rate: Option<MoneyField>,
    pub unit: Option<String>,
    pub first_payment_pence: i64,
    pub subsequent_payment_pence: i64,
    pub annual_payment: Option<MoneyField>,
}

/// Flatten a payment plan into one line per item (parcel items first, then
/// agreement-level items), with first/subsequent amounts allocated from
/// `payments[0]` and `payments[1]`.
pub fn payment_lines(plan: &PaymentPlan) -> Vec<PaymentLine> {
    let first = plan.first_payment();
    let subsequent = plan.subsequent_payment();

    let mut lines = Vec::with_capacity(plan.parcel_items.len() + plan.agreement_level_items.len());

    for (id, item) in &plan.parcel_items {
        lines.push(PaymentLine {
            code: item.code.clone().unwrap_or_default(),
            kind: ItemKind::Parcel,
            description: item.description.clone().unwrap_or_default(),
            rate: item.rate_in_pence.clone(),
            unit: item.unit.clone(),
            first_payment_pence: payment_for_item(first, *id, ItemKind::Parcel),
            subsequent_payment_pence: payment_for_item(subsequent, *id, ItemKind::Parcel),
            annual_payment: item.annual_payment_pence.clone(),
        });
    }

    for (id, item) in &plan.agreement_level_items {
        let code = item.code.clone().unwrap_or_default();
        lines.push(PaymentLine {
            description: strip_code_prefix(&code, item.description.as_deref().unwrap_or("")),
            code,
            kind: ItemKind::AgreementLevel,
            rate: item.annual_payment_pence.clone(),
            unit: None,
            first_payment_pence: payment_for_item(first, *id, ItemKind::AgreementLevel),
            subsequent_payment_pence: payment_for_item(subsequent, *id, ItemKind::AgreementLevel),
            annual_payment: item.annual_payment_pence.clone(),
        });
    }

    lines
}

/// Total first payment (pence) across derived payment lines.
pub fn total_first_payment(lines: &[PaymentLine]) -> i64 {
    lines.iter().map(|line| line.first_payment_pence).sum()
}

/// Total subsequent payment (pence) across derived payment lines.
pub fn total_subsequent_payment(lines: &[PaymentLine]) -> i64 {
    lines.iter().map(|line| line.subsequent_payment_pence).sum()
}

/// Total annual payment (pence) across derived payment lines; lines whose
/// annual amount is missing or non-numeric count as 0.
pub fn total_annual_payment(lines: &[PaymentLine]) -> i64 {
    lines
        .iter()
        .map(|line| {
            line.annual_payment
                .as_ref()
                .and_then(MoneyField::as_pence)
                .unwrap_or(0)
        })
        .sum()
}
