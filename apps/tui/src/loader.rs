use std::path::Path;

use property_map_core::{parse_records, LoadError, PropertyRecord};

/// Reads the data file once. Callers log a failure and carry on with no records.
pub async fn load_records(path: &Path) -> Result<Vec<PropertyRecord>, LoadError> {
    let body = tokio::fs::read_to_string(path).await?;
    parse_records(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = std::env::temp_dir().join(format!("property_map_{}_{name}", std::process::id()));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    #[tokio::test]
    async fn test_load_records_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = scratch_file("ok.json", r#"[{"owner": "Acme", "lat": 30, "lng": -90}]"#)?;

        let records = load_records(&path).await?;
        std::fs::remove_file(&path)?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].owner_label(), "Acme");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = load_records(Path::new("/nonexistent/property_map/data.json")).await;
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() -> Result<(), Box<dyn std::error::Error>> {
        let path = scratch_file("bad.json", "[{\"owner\": ")?;

        let result = load_records(&path).await;
        std::fs::remove_file(&path)?;

        assert!(matches!(result, Err(LoadError::Json(_))));
        Ok(())
    }
}
