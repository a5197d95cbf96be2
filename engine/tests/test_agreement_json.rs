//! Deserialization boundary tests
//!
//! A realistic raw record (Mongo noise and all) must deserialize and drive
//! both page models; a partially-populated or empty record must degrade to
//! empty tables rather than failing.

use farming_agreement_core::{
    build_review_offer_model, build_view_agreement_model, Agreement, AgreementStatus,
};

const SAMPLE_RECORD: &str = r#"{
  "_id": "6943d00c8405b48c784990cd",
  "notificationMessageId": "d0137d0a-c7e9-41e3-a9a4-44f252ebd3db",
  "agreementName": "Example agreement 2",
  "correlationId": "40f01b36-ff08-48f7-9ece-941b7456daa0",
  "clientRef": "client-ref-002",
  "code": "frps-private-beta",
  "identifiers": {
    "sbi": "106284736",
    "frn": "frn",
    "crn": "crn",
    "defraId": "defraId"
  },
  "status": "offered",
  "scheme": "SFI",
  "agreementNumber": "SFI987654321",
  "applicant": {
    "business": {
      "name": "J&S Hartley",
      "email": {"address": "farm@example.test"},
      "address": {"city": "Clitheroe", "postalCode": "BB7 3DD"}
    },
    "customer": {
      "name": {"title": "Mr.", "first": "Edward", "middle": "Paul", "last": "Jones"}
    }
  },
  "application": {
    "parcel": [
      {
        "sheetId": "SD6743",
        "parcelId": "8083",
        "area": {"unit": "ha", "quantity": 5.2182},
        "actions": [
          {
            "code": "CMOR1",
            "version": 1,
            "durationYears": 3,
            "appliedFor": {"unit": "ha", "quantity": 4.7575}
          }
        ]
      }
    ]
  },
  "payment": {
    "agreementStartDate": "2026-01-01",
    "agreementEndDate": "2027-01-01",
    "frequency": "Quarterly",
    "agreementTotalPence": 34544,
    "annualTotalPence": 34544,
    "parcelItems": {
      "1": {
        "code": "CMOR1",
        "description": "Assess moorland and produce a written record",
        "version": 1,
        "unit": "ha",
        "quantity": 4.7575,
        "rateInPence": 1060,
        "annualPaymentPence": 5043,
        "sheetId": "SD6743",
        "parcelId": "8083"
      },
      "2": {
        "code": "CMOR1",
        "description": "Assess moorland and produce a written record",
        "version": 1,
        "unit": "ha",
        "quantity": 2.1705,
        "rateInPence": 1060,
        "annualPaymentPence": 2301,
        "sheetId": "SD6743",
        "parcelId": "8333"
      }
    },
    "agreementLevelItems": {
      "1": {
        "code": "CMOR1",
        "description": "Assess moorland and produce a written record",
        "version": 1,
        "annualPaymentPence": 27200
      }
    },
    "payments": [
      {
        "totalPaymentPence": 8639,
        "paymentDate": "2026-04-06",
        "lineItems": [
          {"parcelItemId": 1, "paymentPence": 1263},
          {"parcelItemId": 2, "paymentPence": 576},
          {"agreementLevelItemId": 1, "paymentPence": 6800}
        ]
      },
      {
        "totalPaymentPence": 8635,
        "paymentDate": "2026-07-06",
        "lineItems": [
          {"parcelItemId": 1, "paymentPence": 1260},
          {"parcelItemId": 2, "paymentPence": 575},
          {"agreementLevelItemId": 1, "paymentPence": 6800}
        ]
      },
      {
        "totalPaymentPence": 8635,
        "paymentDate": "2026-10-05",
        "lineItems": [
          {"parcelItemId": 1, "paymentPence": 1260},
          {"parcelItemId": 2, "paymentPence": 575},
          {"agreementLevelItemId": 1, "paymentPence": 6800}
        ]
      },
      {
        "totalPaymentPence": 8635,
        "paymentDate": "2027-01-05",
        "lineItems": [
          {"parcelItemId": 1, "paymentPence": 1260},
          {"parcelItemId": 2, "paymentPence": 575},
          {"agreementLevelItemId": 1, "paymentPence": 6800}
        ]
      }
    ]
  },
  "__v": 0,
  "createdAt": "2025-12-18T09:57:32.046Z",
  "updatedAt": "2025-12-18T09:57:32.054Z"
}"#;

#[test]
fn test_sample_record_deserializes() {
    let agreement = Agreement::from_json(SAMPLE_RECORD).unwrap();

    assert_eq!(agreement.status, AgreementStatus::Offered);
    assert_eq!(agreement.agreement_number.as_deref(), Some("SFI987654321"));
    assert_eq!(agreement.identifiers.sbi.as_deref(), Some("106284736"));
    assert_eq!(
        agreement.correlation_id.unwrap().to_string(),
        "40f01b36-ff08-48f7-9ece-941b7456daa0"
    );
    assert_eq!(agreement.payment.parcel_items.len(), 2);
    assert_eq!(agreement.payment.payments.len(), 4);
    assert_eq!(agreement.payment.annual_total_pence, 34544);
}

#[test]
fn test_sample_record_drives_both_page_models() {
    let agreement = Agreement::from_json(SAMPLE_RECORD).unwrap();

    let review = build_review_offer_model(&agreement);
    assert_eq!(review.summary_of_actions.data.len(), 1);
    assert_eq!(review.summary_of_payments.data.len(), 4);
    assert_eq!(review.annual_payments.len(), 1);
    assert_eq!(review.annual_payments[0].payment, "£272 per agreement");

    let view = build_view_agreement_model(&agreement);
    assert_eq!(view.agreement_name, "J&S Hartley FPTT");
    // offered: masked
    assert_eq!(view.business_name, "XXXXX");
    // one schedule row per code plus totals, two calendar years
    assert_eq!(view.annual_payment_schedule.data.len(), 2);
    assert_eq!(view.annual_payment_schedule.headings.len(), 4);

    // grand total across both years equals the agreement total
    let totals = view.annual_payment_schedule.data.last().unwrap();
    assert_eq!(totals.last().unwrap().text.to_string(), "£345.44");
}

#[test]
fn test_empty_record_degrades_to_empty_tables() {
    let agreement = Agreement::from_json("{}").unwrap();

    let review = build_review_offer_model(&agreement);
    assert!(review.summary_of_actions.data.is_empty());
    assert_eq!(review.summary_of_payments.data.len(), 1);
    assert!(review.annual_payments.is_empty());

    let view = build_view_agreement_model(&agreement);
    assert_eq!(view.business_name, "XXXXX");
    assert!(view.agreement_land.data.is_empty());
    assert_eq!(view.agreement_land.headings.len(), 2);
}

#[test]
fn test_malformed_json_is_the_only_failure() {
    let error = Agreement::from_json("not json").unwrap_err();
    assert!(error.to_string().contains("invalid agreement record"));
}

#[test]
fn test_unknown_status_redacts_like_a_draft() {
    let agreement = Agreement::from_json(r#"{"status": "superseded"}"#).unwrap();
    let view = build_view_agreement_model(&agreement);
    assert!(view.is_draft_agreement);
    assert_eq!(view.business_name, "XXXXX");
}
