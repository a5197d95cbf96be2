//! Page view models
//!
//! The assemblers that turn a raw agreement record into the flat objects the
//! template layer renders, applying the cross-cutting redaction rules.

pub mod redact;
pub mod review_offer;
pub mod view_agreement;

// Re-exports
pub use redact::{format_applicant_name, redact_unless_binding, REDACTED_PLACEHOLDER};
pub use review_offer::{build_review_offer_model, ReviewOfferModel, REVIEW_OFFER_PAGE_TITLE};
pub use view_agreement::{
    build_view_agreement_model, ViewAgreementModel, AGREEMENT_NAME_SUFFIX,
    MOORLAND_ASSESSMENT_CODE,
};
