//! Agreement record model
//!
//! The raw agreement record as fetched from the agreements API. Every field
//! is optional at the wire level: absent nested objects default to empty
//! structures so the presentation builders never null-check. Unknown fields
//! (Mongo ids, version counters) are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::de;
use crate::models::payment::PaymentPlan;

/// Errors raised at the deserialization boundary.
///
/// This is the engine's only failure mode: a record that deserializes always
/// produces a complete view model.
#[derive(Debug, Error)]
pub enum AgreementError {
    #[error("invalid agreement record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// Lifecycle status of an agreement offer.
///
/// `offered` can move to `accepted` (binding) or `withdrawn` (non-binding);
/// both are terminal. Transitions happen upstream; the engine only branches
/// display behaviour on the current value. An unknown or missing status
/// deserializes to `Offered`, the non-binding safe default, so redaction
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementStatus {
    #[default]
    Offered,
    Accepted,
    Withdrawn,
}

impl AgreementStatus {
    /// Only an accepted agreement is binding; real identity and dates may
    /// be shown.
    pub fn is_binding(self) -> bool {
        matches!(self, AgreementStatus::Accepted)
    }

    pub fn is_draft(self) -> bool {
        matches!(self, AgreementStatus::Offered)
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, AgreementStatus::Accepted)
    }

    pub fn is_withdrawn(self) -> bool {
        matches!(self, AgreementStatus::Withdrawn)
    }
}

impl<'de> Deserialize<'de> for AgreementStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "accepted" => AgreementStatus::Accepted,
            "withdrawn" => AgreementStatus::Withdrawn,
            _ => AgreementStatus::Offered,
        })
    }
}

/// Business identifiers attached to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identifiers {
    pub sbi: Option<String>,
    pub frn: Option<String>,
    pub crn: Option<String>,
    pub defra_id: Option<String>,
}

/// The applicant's business details (contact fields are not surfaced).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    pub name: Option<String>,
}

/// Structured customer name, joined for display by the page models.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerName {
    pub title: Option<String>,
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub name: Option<CustomerName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Applicant {
    pub business: Business,
    pub customer: Customer,
}

/// What was applied for on one action within a parcel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppliedFor {
    pub unit: Option<String>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub quantity: f64,
}

/// One action applied for on a land parcel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParcelAction {
    pub code: Option<String>,
    /// Whole years; the wire sometimes sends this as a numeric string.
    #[serde(deserialize_with = "de::lenient_f64")]
    pub duration_years: f64,
    pub applied_for: AppliedFor,
}

/// A land parcel with the actions applied for on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parcel {
    pub sheet_id: Option<String>,
    pub parcel_id: Option<String>,
    pub actions: Vec<ParcelAction>,
}

/// The application section: the land parcels the offer covers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub parcel: Vec<Parcel>,
}

/// A raw agreement record.
///
/// # Example
/// ```
/// use farming_agreement_core::Agreement;
///
/// let agreement = Agreement::from_json(
///     r#"{"status": "accepted", "applicant": {"business": {"name": "J&S Hartley"}}}"#,
/// )
/// .unwrap();
/// assert!(agreement.status.is_binding());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Agreement {
    pub agreement_number: Option<String>,
    pub agreement_name: Option<String>,
    pub client_ref: Option<String>,
    pub scheme: Option<String>,
    pub correlation_id: Option<Uuid>,
    pub notification_message_id: Option<Uuid>,
    pub identifiers: Identifiers,
    pub status: AgreementStatus,
    pub applicant: Applicant,
    pub application: Application,
    pub payment: PaymentPlan,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Agreement {
    /// Deserialize a raw record, the engine's single fallible boundary.
    pub fn from_json(raw: &str) -> Result<Self, AgreementError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether any parcel item carries the given action code.
    ///
    /// Used to toggle code-specific page content (e.g. the moorland
    /// assessment guidance shown when `CMOR1` is present).
    pub fn has_parcel_code(&self, code: &str) -> bool {
        self.payment
            .parcel_items
            .values()
            .any(|item| item.code.as_deref() == Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_defaults_to_offered() {
        let status: AgreementStatus = serde_json::from_value(serde_json::json!("pending")).unwrap();
        assert_eq!(status, AgreementStatus::Offered);
    }

    #[test]
    fn test_missing_status_defaults_to_offered() {
        let agreement: Agreement = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(agreement.status, AgreementStatus::Offered);
        assert!(!agreement.status.is_binding());
    }

    #[test]
    fn test_status_round_trip() {
        for (raw, status) in [
            ("offered", AgreementStatus::Offered),
            ("accepted", AgreementStatus::Accepted),
            ("withdrawn", AgreementStatus::Withdrawn),
        ] {
            let parsed: AgreementStatus = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(raw));
        }
    }

    #[test]
    fn test_has_parcel_code() {
        let agreement: Agreement = serde_json::from_value(serde_json::json!({
            "payment": {
                "parcelItems": {
                    "1": {"code": "CMOR1"},
                    "2": {"code": "UPL3"}
                }
            }
        }))
        .unwrap();
        assert!(agreement.has_parcel_code("CMOR1"));
        assert!(!agreement.has_parcel_code("BND1"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let agreement = Agreement::from_json(
            r#"{"_id": "68fa51d0206fcc31cb4b4512", "__v": 0, "status": "withdrawn"}"#,
        )
        .unwrap();
        assert!(agreement.status.is_withdrawn());
    }
}
