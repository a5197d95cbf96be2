//! Payment plan model
//!
//! The `payment` section of an agreement record: the recurring parcel-level
//! items, the flat agreement-level items, and the scheduled payment events
//! that distribute them over the agreement's life.
//!
//! Item maps are keyed by integer id; payment line items reference those ids
//! as typed foreign keys. Iteration order of the maps is ascending id, but
//! nothing display-facing relies on it: every table sorts explicitly.
//!
//! CRITICAL: All money values are i64 (pence)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::MoneyField;
use crate::models::de;

/// Key type shared by `parcelItems`/`agreementLevelItems` and the foreign
/// keys on payment line items.
pub type ItemId = u64;

/// A per-parcel recurring payment line (area x rate).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParcelItem {
    pub code: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub quantity: f64,
    pub rate_in_pence: Option<MoneyField>,
    pub annual_payment_pence: Option<MoneyField>,
    pub sheet_id: Option<String>,
    pub parcel_id: Option<String>,
}

/// A flat annual payment not tied to any parcel, charged once per agreement
/// per year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgreementLevelItem {
    pub code: Option<String>,
    pub description: Option<String>,
    pub annual_payment_pence: Option<MoneyField>,
}

/// One line of a payment event, referencing exactly one item kind.
///
/// Records carry either `parcelItemId` or `agreementLevelItemId`; if both
/// are somehow present the agreement-level reference wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    #[serde(deserialize_with = "de::lenient_item_id")]
    pub parcel_item_id: Option<ItemId>,
    #[serde(deserialize_with = "de::lenient_item_id")]
    pub agreement_level_item_id: Option<ItemId>,
    #[serde(deserialize_with = "de::lenient_pence")]
    pub payment_pence: i64,
}

/// A scheduled payment event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentEvent {
    pub payment_date: Option<String>,
    #[serde(deserialize_with = "de::lenient_pence")]
    pub total_payment_pence: i64,
    pub line_items: Vec<LineItem>,
}

/// The full payment plan of an agreement.
///
/// `payments[0]` is the first (possibly prorated) payment, `payments[1]` is
/// representative of all subsequent payments, and the last element is the
/// current quarter's payment for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentPlan {
    pub agreement_start_date: Option<String>,
    pub agreement_end_date: Option<String>,
    pub frequency: Option<String>,
    #[serde(deserialize_with = "de::lenient_pence")]
    pub agreement_total_pence: i64,
    #[serde(deserialize_with = "de::lenient_pence")]
    pub annual_total_pence: i64,
    pub parcel_items: BTreeMap<ItemId, ParcelItem>,
    pub agreement_level_items: BTreeMap<ItemId, AgreementLevelItem>,
    pub payments: Vec<PaymentEvent>,
}

impl PaymentPlan {
    /// The first scheduled payment event, if any.
    pub fn first_payment(&self) -> Option<&PaymentEvent> {
        self.payments.first()
    }

    /// The event representative of all payments after the first.
    pub fn subsequent_payment(&self) -> Option<&PaymentEvent> {
        self.payments.get(1)
    }

    /// The most recent scheduled event, shown as "this quarter's" payment.
    pub fn current_quarter_payment(&self) -> Option<&PaymentEvent> {
        self.payments.last()
    }
}
