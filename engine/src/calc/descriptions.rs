//! Code-to-description resolution
//!
//! Item descriptions sometimes repeat their own code as a `"CODE: "` prefix
//! ("CMOR1: Assess moorland..."). Display strips that prefix. Descriptions
//! are resolved per code, not per item: several parcel items may share a
//! code, and agreement-level items win on collision.

use std::collections::BTreeMap;

use crate::models::PaymentPlan;

/// Strip a redundant `"<code>: "` prefix from a description.
///
/// Falls back to the verbatim description when stripping would leave
/// nothing.
pub fn strip_code_prefix(code: &str, description: &str) -> String {
    let prefix = format!("{code}: ");
    let stripped = description.strip_prefix(&prefix).unwrap_or(description);
    if stripped.is_empty() {
        description.to_string()
    } else {
        stripped.to_string()
    }
}

/// Build the code -> description map for a payment plan.
///
/// Parcel items register first; agreement-level entries are then applied as
/// an explicit override pass, so agreement-level wins for shared codes. An
/// item with a code but no description still registers the code, with an
/// empty description.
pub fn code_descriptions(plan: &PaymentPlan) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for item in plan.parcel_items.values() {
        if let Some(code) = item.code.as_deref().filter(|code| !code.is_empty()) {
            map.insert(
                code.to_string(),
                strip_code_prefix(code, item.description.as_deref().unwrap_or("")),
            );
        }
    }

    // agreement-level wins
    for item in plan.agreement_level_items.values() {
        if let Some(code) = item.code.as_deref().filter(|code| !code.is_empty()) {
            map.insert(
                code.to_string(),
                strip_code_prefix(code, item.description.as_deref().unwrap_or("")),
            );
        }
    }

    map
}
