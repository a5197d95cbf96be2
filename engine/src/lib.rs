//! Farming Agreement Core - Presentation Calculation Engine
//!
//! Turns a raw farming-grant agreement record into the derived view models
//! an applicant sees when reviewing or viewing an offer: action summaries,
//! payment summaries with totals, the multi-year annual payment schedule,
//! one-off annual payment listings, and status-dependent redaction of
//! identity fields.
//!
//! # Architecture
//!
//! - **models**: Domain types (Agreement, PaymentPlan, items, events)
//! - **currency**: Pence-to-GBP display formatting
//! - **dates**: Lenient wire-date parsing and display forms
//! - **calc**: Pure derivation passes (allocation, descriptions, ordering)
//! - **tables**: `{headings, data}` table builders
//! - **pages**: Page model assemblers and redaction
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (pence)
//! 2. The engine is pure and synchronous: no I/O, no shared state
//! 3. A record that deserializes always produces a complete model: missing
//!    sections degrade to empty tables, never to errors

// Module declarations
pub mod calc;
pub mod currency;
pub mod dates;
pub mod models;
pub mod pages;
pub mod tables;

// Re-exports for convenience
pub use calc::{payment_for_item, payment_lines, ItemKind, PaymentLine};
pub use currency::{format_money, format_pence, MoneyField};
pub use models::{
    Agreement, AgreementError, AgreementLevelItem, AgreementStatus, ItemId, LineItem, ParcelItem,
    PaymentEvent, PaymentPlan,
};
pub use pages::{
    build_review_offer_model, build_view_agreement_model, ReviewOfferModel, ViewAgreementModel,
    REDACTED_PLACEHOLDER,
};
pub use tables::{
    additional_annual_payments, agreement_actions_table, annual_payment_schedule_table,
    land_summary_table, offer_actions_table, payments_summary_table, AnnualPayment, Cell,
    CellAttributes, CellValue, Table,
};
