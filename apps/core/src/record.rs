use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::host::LatLng;
use crate::owners::normalize_owner;

/// One property as it appears in the data file.
///
/// Every field is optional. Text fields take a JSON string or number; any other
/// JSON type is treated as absent. Coordinates take a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "text_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub office_phone: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub manager_email: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub compliance: Option<String>,
    #[serde(default = "missing_coordinate", deserialize_with = "coordinate_field")]
    pub lat: f64,
    #[serde(default = "missing_coordinate", deserialize_with = "coordinate_field")]
    pub lng: f64,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            city: None,
            state: None,
            zip: None,
            office_phone: None,
            manager_email: None,
            owner: None,
            compliance: None,
            lat: missing_coordinate(),
            lng: missing_coordinate(),
        }
    }
}

impl PropertyRecord {
    /// Builds a record from an arbitrary JSON value. Non-objects become a record
    /// with every field absent.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The point to draw this record at, if it has one.
    ///
    /// Zero is the "no coordinate" sentinel, so a record sitting exactly on the
    /// equator or prime meridian is not mappable.
    pub fn position(&self) -> Option<LatLng> {
        let mappable = self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat != 0.0
            && self.lng != 0.0;
        mappable.then(|| LatLng::new(self.lat, self.lng))
    }

    pub fn is_mappable(&self) -> bool {
        self.position().is_some()
    }

    pub fn owner_label(&self) -> String {
        normalize_owner(self.owner.as_deref())
    }
}

const fn missing_coordinate() -> f64 {
    f64::NAN
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn coordinate_field<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_coordinate(&value))
}

/// Null and blank strings read as 0, anything unparseable as NaN.
pub fn parse_coordinate(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::Null => 0.0,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_coordinates() {
        let record = PropertyRecord::from_value(json!({ "lat": " 30.5 ", "lng": "-90" }));
        assert_eq!(record.position(), Some(LatLng::new(30.5, -90.0)));
    }

    #[test]
    fn test_zero_and_missing_coordinates_are_not_mappable() {
        let zero = PropertyRecord::from_value(json!({ "lat": 0, "lng": -90 }));
        let missing = PropertyRecord::from_value(json!({ "lat": 30 }));
        let blank = PropertyRecord::from_value(json!({ "lat": "", "lng": null }));
        let junk = PropertyRecord::from_value(json!({ "lat": "north", "lng": 12 }));
        let infinite = PropertyRecord::from_value(json!({ "lat": "Infinity", "lng": 12 }));

        for record in [zero, missing, blank, junk, infinite] {
            assert!(!record.is_mappable());
            assert_eq!(record.position(), None);
        }
    }

    #[test]
    fn test_text_fields_accept_numbers_and_drop_other_types() {
        let record = PropertyRecord::from_value(json!({
            "zip": 35203,
            "owner": true,
            "name": ["not", "a", "name"],
            "city": "Birmingham",
        }));

        assert_eq!(record.zip.as_deref(), Some("35203"));
        assert_eq!(record.owner, None);
        assert_eq!(record.name, None);
        assert_eq!(record.city.as_deref(), Some("Birmingham"));
    }

    #[test]
    fn test_non_object_becomes_empty_record() {
        let record = PropertyRecord::from_value(json!(42));
        assert_eq!(record.owner_label(), "Unknown");
        assert!(!record.is_mappable());
    }
}
