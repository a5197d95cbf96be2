//! Offer-review page model
//!
//! The page an applicant sees before accepting: what actions the offer
//! covers, what each pays, and the one-off annual payments. No identity or
//! date fields appear here, so nothing needs redacting.

use serde::Serialize;

use crate::models::Agreement;
use crate::tables::{
    additional_annual_payments, offer_actions_table, payments_summary_table, AnnualPayment, Table,
};

pub const REVIEW_OFFER_PAGE_TITLE: &str = "Review your agreement offer";

/// View model for the offer-review page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOfferModel {
    pub page_title: String,
    pub summary_of_actions: Table,
    pub summary_of_payments: Table,
    pub annual_payments: Vec<AnnualPayment>,
}

/// Assemble the offer-review model from a raw agreement record.
///
/// # Example
/// ```
/// use farming_agreement_core::{build_review_offer_model, Agreement};
///
/// let model = build_review_offer_model(&Agreement::default());
/// assert_eq!(model.page_title, "Review your agreement offer");
/// assert!(model.summary_of_actions.data.is_empty());
/// assert_eq!(model.summary_of_actions.headings.len(), 5);
/// ```
pub fn build_review_offer_model(agreement: &Agreement) -> ReviewOfferModel {
    ReviewOfferModel {
        page_title: REVIEW_OFFER_PAGE_TITLE.to_string(),
        summary_of_actions: offer_actions_table(agreement),
        summary_of_payments: payments_summary_table(&agreement.payment),
        annual_payments: additional_annual_payments(&agreement.payment),
    }
}
