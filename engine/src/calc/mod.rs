//! Pure derivation passes over a payment plan
//!
//! Everything here is presentation-free: allocation lookups, description
//! resolution and ordering. The `tables` module turns these results into
//! rendered cells.

pub mod allocator;
pub mod descriptions;
pub mod order;

// Re-exports
pub use allocator::{
    payment_for_item, payment_lines, total_annual_payment, total_first_payment,
    total_subsequent_payment, ItemKind, PaymentLine,
};
pub use descriptions::{code_descriptions, strip_code_prefix};
pub use order::natural_code_cmp;
