//! Domain models for agreement records

pub mod agreement;
mod de;
pub mod payment;

// Re-exports
pub use agreement::{
    Agreement, AgreementError, AgreementStatus, Applicant, AppliedFor, Application, Business,
    Customer, CustomerName, Identifiers, Parcel, ParcelAction,
};
pub use payment::{
    AgreementLevelItem, ItemId, LineItem, ParcelItem, PaymentEvent, PaymentPlan,
};
