use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::record::PropertyRecord;

/// Data file published next to the page.
pub const DATA_FILE: &str = "final_properties_with_coords_and_rvp.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch property data: {0}")]
    Fetch(String),
    #[error("failed to read property data: {0}")]
    Io(#[from] std::io::Error),
    #[error("property data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("property data must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Appends a `cb` query parameter so a reload never reuses a cached copy.
pub fn cache_busted_url(base: &str, now: DateTime<Utc>) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}cb={}", now.timestamp_millis())
}

pub fn parse_records(body: &str) -> Result<Vec<PropertyRecord>, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    records_from_value(value)
}

pub fn records_from_value(value: Value) -> Result<Vec<PropertyRecord>, LoadError> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(PropertyRecord::from_value).collect()),
        other => Err(LoadError::NotAnArray(json_kind(&other))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cache_buster_uses_unix_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).single();
        let Some(now) = now else {
            panic!("timestamp out of range");
        };

        assert_eq!(
            cache_busted_url(DATA_FILE, now),
            "final_properties_with_coords_and_rvp.json?cb=1700000000123"
        );
        assert_eq!(
            cache_busted_url("data.json?v=2", now),
            "data.json?v=2&cb=1700000000123"
        );
    }

    #[test]
    fn test_parse_records_reads_every_element() -> Result<(), LoadError> {
        let records = parse_records(
            r#"[
                {"name": "Oak Court", "owner": "Acme", "lat": "32.1", "lng": -86.2, "extra": 1},
                {},
                7
            ]"#,
        )?;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name.as_deref(), Some("Oak Court"));
        assert!(records[0].is_mappable());
        assert_eq!(records[1].owner_label(), "Unknown");
        assert!(!records[2].is_mappable());
        Ok(())
    }

    #[test]
    fn test_parse_records_rejects_bad_input() {
        assert!(matches!(parse_records("{\"lat\": 1}"), Err(LoadError::NotAnArray("an object"))));
        assert!(matches!(parse_records("[{"), Err(LoadError::Json(_))));
        assert!(matches!(parse_records(""), Err(LoadError::Json(_))));
    }
}
