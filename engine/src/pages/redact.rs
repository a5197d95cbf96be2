//! Status-dependent redaction
//!
//! Until an agreement is binding the page must not reveal who the offer is
//! for or when it runs: business name, applicant name and the agreement
//! dates are masked with a fixed placeholder for `offered` and `withdrawn`
//! agreements.

use crate::models::{AgreementStatus, Customer};

/// The fixed mask shown in place of redacted values.
pub const REDACTED_PLACEHOLDER: &str = "XXXXX";

/// Pass the value through for a binding agreement, mask it otherwise.
///
/// # Example
/// ```
/// use farming_agreement_core::models::AgreementStatus;
/// use farming_agreement_core::pages::redact::{redact_unless_binding, REDACTED_PLACEHOLDER};
///
/// let shown = redact_unless_binding(AgreementStatus::Accepted, "J&S Hartley".to_string());
/// assert_eq!(shown, "J&S Hartley");
///
/// let masked = redact_unless_binding(AgreementStatus::Offered, "J&S Hartley".to_string());
/// assert_eq!(masked, REDACTED_PLACEHOLDER);
/// ```
pub fn redact_unless_binding(status: AgreementStatus, value: String) -> String {
    if status.is_binding() {
        value
    } else {
        REDACTED_PLACEHOLDER.to_string()
    }
}

/// Join the non-empty parts of a customer's structured name with single
/// spaces; a missing name yields the empty string.
pub fn format_applicant_name(customer: &Customer) -> String {
    let Some(name) = &customer.name else {
        return String::new();
    };
    [&name.title, &name.first, &name.middle, &name.last]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, CustomerName};

    #[test]
    fn test_full_name_joins_all_parts() {
        let customer = Customer {
            name: Some(CustomerName {
                title: Some("Mr.".to_string()),
                first: Some("Edward".to_string()),
                middle: Some("Paul".to_string()),
                last: Some("Jones".to_string()),
            }),
        };
        assert_eq!(format_applicant_name(&customer), "Mr. Edward Paul Jones");
    }

    #[test]
    fn test_missing_and_blank_parts_are_dropped() {
        let customer = Customer {
            name: Some(CustomerName {
                title: None,
                first: Some("  Edward ".to_string()),
                middle: Some("   ".to_string()),
                last: Some("Jones".to_string()),
            }),
        };
        assert_eq!(format_applicant_name(&customer), "Edward Jones");
    }

    #[test]
    fn test_missing_name_is_empty() {
        assert_eq!(format_applicant_name(&Customer::default()), "");
    }
}
