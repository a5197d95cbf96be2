//! Agreement-view page model
//!
//! The page shown once an offer exists: land, actions with dates, payment
//! summary and the multi-year schedule, plus the applicant identity fields.
//! Identity and dates stay masked until the agreement is binding.

use serde::Serialize;

use crate::dates::format_long_date;
use crate::models::{Agreement, AgreementStatus};
use crate::pages::redact::{format_applicant_name, redact_unless_binding, REDACTED_PLACEHOLDER};
use crate::tables::{
    agreement_actions_table, annual_payment_schedule_table, land_summary_table,
    payments_summary_table, Table,
};

/// Suffix appended to the business name to form the display agreement name.
pub const AGREEMENT_NAME_SUFFIX: &str = "FPTT";

/// Action code whose presence toggles the moorland assessment guidance.
pub const MOORLAND_ASSESSMENT_CODE: &str = "CMOR1";

/// View model for the agreement-view page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAgreementModel {
    pub agreement_name: String,
    pub agreement_start_date: String,
    pub agreement_end_date: String,
    pub is_draft_agreement: bool,
    pub is_agreement_accepted: bool,
    pub is_withdrawn_agreement: bool,
    pub is_cmor1_action_used: bool,
    pub business_name: String,
    pub applicant_name: String,
    pub agreement_land: Table,
    pub summary_of_actions: Table,
    pub summary_of_payments: Table,
    pub annual_payment_schedule: Table,
}

/// Assemble the agreement-view model from a raw agreement record.
///
/// The agreement name is always derived from the real business name, even
/// while `businessName` itself is masked.
pub fn build_view_agreement_model(agreement: &Agreement) -> ViewAgreementModel {
    let status = agreement.status;
    let business_name = agreement
        .applicant
        .business
        .name
        .clone()
        .unwrap_or_default();
    let agreement_name = format!("{business_name} {AGREEMENT_NAME_SUFFIX}");

    ViewAgreementModel {
        agreement_name,
        agreement_start_date: display_date(status, agreement.payment.agreement_start_date.as_deref()),
        agreement_end_date: display_date(status, agreement.payment.agreement_end_date.as_deref()),
        is_draft_agreement: status.is_draft(),
        is_agreement_accepted: status.is_accepted(),
        is_withdrawn_agreement: status.is_withdrawn(),
        is_cmor1_action_used: agreement.has_parcel_code(MOORLAND_ASSESSMENT_CODE),
        business_name: redact_unless_binding(status, business_name),
        applicant_name: redact_unless_binding(
            status,
            format_applicant_name(&agreement.applicant.customer),
        ),
        agreement_land: land_summary_table(&agreement.payment),
        summary_of_actions: agreement_actions_table(agreement),
        summary_of_payments: payments_summary_table(&agreement.payment),
        annual_payment_schedule: annual_payment_schedule_table(&agreement.payment),
    }
}

/// Long-form display date, masked for non-binding agreements and when the
/// wire date does not parse.
fn display_date(status: AgreementStatus, raw: Option<&str>) -> String {
    if !status.is_binding() {
        return REDACTED_PLACEHOLDER.to_string();
    }
    raw.and_then(format_long_date)
        .unwrap_or_else(|| REDACTED_PLACEHOLDER.to_string())
}
