//! Agreement land summary
//!
//! Parcel items grouped by land parcel reference with their areas summed.
//! Groups appear in first-seen order (the item map iterates ascending id).

use std::collections::HashMap;

use crate::models::PaymentPlan;
use crate::tables::{round_dp4, Cell, Table};

/// Build the land table: one row per distinct `"<sheetId> <parcelId>"`
/// reference with the total area across that parcel's items.
pub fn land_summary_table(plan: &PaymentPlan) -> Table {
    let mut order: Vec<String> = Vec::new();
    let mut areas: HashMap<String, f64> = HashMap::new();

    for item in plan.parcel_items.values() {
        let key = format!(
            "{} {}",
            item.sheet_id.as_deref().unwrap_or(""),
            item.parcel_id.as_deref().unwrap_or("")
        );
        if !areas.contains_key(&key) {
            order.push(key.clone());
        }
        *areas.entry(key).or_insert(0.0) += item.quantity;
    }

    let data = order
        .into_iter()
        .map(|key| {
            let area = areas[&key];
            vec![Cell::text(key).nowrap(), Cell::number(round_dp4(area))]
        })
        .collect();

    Table {
        headings: vec![
            Cell::text("Parcel").nowrap(),
            Cell::text("Total parcel area (ha)"),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CellValue;

    #[test]
    fn test_areas_sum_per_parcel_reference() {
        let plan: PaymentPlan = serde_json::from_value(serde_json::json!({
            "parcelItems": {
                "1": {"code": "CMOR1", "quantity": 4.7575, "sheetId": "SD6743", "parcelId": "8083"},
                "2": {"code": "UPL3", "quantity": 4.7575, "sheetId": "SD6743", "parcelId": "8083"},
                "3": {"code": "CMOR1", "quantity": 2.1705, "sheetId": "SD4842", "parcelId": "4495"}
            }
        }))
        .unwrap();

        let table = land_summary_table(&plan);
        assert_eq!(table.data.len(), 2);
        assert_eq!(table.data[0][0].text, CellValue::Text("SD6743 8083".to_string()));
        assert_eq!(table.data[0][1].text, CellValue::Float(9.515));
        assert_eq!(table.data[1][0].text, CellValue::Text("SD4842 4495".to_string()));
        assert_eq!(table.data[1][1].text, CellValue::Float(2.1705));
    }

    #[test]
    fn test_empty_plan_keeps_headings() {
        let table = land_summary_table(&PaymentPlan::default());
        assert!(table.data.is_empty());
        assert_eq!(table.headings.len(), 2);
    }
}
