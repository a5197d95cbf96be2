//! One-off annual payments listing
//!
//! Agreement-level items rendered as a flat list for the offer-review page,
//! sorted ascending by code.

use serde::{Deserialize, Serialize};

use crate::calc::strip_code_prefix;
use crate::currency::format_money;
use crate::models::PaymentPlan;

/// One agreement-level payment as shown in the "additional annual payments"
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPayment {
    pub code: String,
    pub description: String,
    pub payment: String,
}

/// List the agreement-level items, sorted by code; missing or empty
/// `agreementLevelItems` yields an empty list.
pub fn additional_annual_payments(plan: &PaymentPlan) -> Vec<AnnualPayment> {
    let mut rows: Vec<AnnualPayment> = plan
        .agreement_level_items
        .values()
        .map(|item| {
            let code = item.code.clone().unwrap_or_default();
            AnnualPayment {
                description: strip_code_prefix(&code, item.description.as_deref().unwrap_or("")),
                payment: format!(
                    "{} per agreement",
                    format_money(item.annual_payment_pence.as_ref())
                ),
                code,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.code.cmp(&b.code));
    rows
}
