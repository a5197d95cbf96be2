//! Lenient wire-format coercions
//!
//! The agreements API has shipped numbers as strings and strings as numbers
//! at various points in its history. These deserializers coerce the way the
//! consuming service always has: numeric strings parse, `null` and anything
//! unparseable fall back to the field default.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberLike {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberLike::Int(value) => Some(*value as f64),
            NumberLike::Float(value) => Some(*value),
            NumberLike::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Integer pence; numeric strings coerce, everything else is 0.
pub(crate) fn lenient_pence<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberLike>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .unwrap_or(0))
}

/// Quantity or duration; numeric strings coerce, everything else is 0.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberLike>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0))
}

/// Item foreign key; a non-numeric or fractional value references nothing.
pub(crate) fn lenient_item_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberLike>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u64))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_pence")]
        pence: i64,
        #[serde(deserialize_with = "super::lenient_f64")]
        quantity: f64,
        #[serde(deserialize_with = "super::lenient_item_id")]
        id: Option<u64>,
    }

    fn probe(json: serde_json::Value) -> Probe {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let p = probe(serde_json::json!({"pence": "250", "quantity": "2.5", "id": "7"}));
        assert_eq!(p.pence, 250);
        assert_eq!(p.quantity, 2.5);
        assert_eq!(p.id, Some(7));
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let p = probe(serde_json::json!({"pence": "£5", "quantity": "lots", "id": "item-1"}));
        assert_eq!(p.pence, 0);
        assert_eq!(p.quantity, 0.0);
        assert_eq!(p.id, None);
    }

    #[test]
    fn test_null_and_missing_fall_back_to_defaults() {
        let p = probe(serde_json::json!({"pence": null}));
        assert_eq!(p.pence, 0);
        assert_eq!(p.quantity, 0.0);
        assert_eq!(p.id, None);
    }

    #[test]
    fn test_fractional_pence_round() {
        let p = probe(serde_json::json!({"pence": 1250.5}));
        assert_eq!(p.pence, 1251);
    }
}
