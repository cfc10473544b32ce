//! Catalog file loading
//!
//! A catalog file holds a `spots` list, as JSON or as TOML (`[[spots]]`
//! tables); the format follows the file extension.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{CatalogError, InMemoryCatalog};
use crate::domain::spot::{SpotCatalog, SpotRecord};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    spots: Vec<SpotRecord>,
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let file: CatalogFile = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    if file.spots.is_empty() {
        return Err(CatalogError::Empty(path.display().to_string()));
    }

    let catalog = InMemoryCatalog::new(file.spots)?;
    info!(path = %path.display(), spots = catalog.spots().len(), "Catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spot::SpotType;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_json_catalog() {
        let file = write_temp(
            ".json",
            r#"{ "spots": [
                { "id": 1, "name": "Fortress Square", "price": 90, "available": 6, "total": 14,
                  "type": "covered", "features": ["EV Charging"],
                  "coordinate": { "latitude": 31.53, "longitude": 74.36 } },
                { "id": 2, "name": "Mall Road Lot", "price": 50, "available": 0, "total": 8,
                  "type": "open", "coordinate": { "latitude": 31.56, "longitude": 74.31 } }
            ] }"#,
        );
        let catalog = load_catalog(file.path()).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_id(2).map(|s| s.spot_type), Some(SpotType::Open));
    }

    #[test]
    fn loads_toml_catalog() {
        let file = write_temp(
            ".toml",
            r#"
[[spots]]
id = 10
name = "DHA Phase 5 Lot"
price = 70
available = 9
total = 20
type = "open"
coordinate = { latitude = 31.46, longitude = 74.41 }
"#,
        );
        let catalog = load_catalog(file.path()).expect("valid catalog");
        assert_eq!(catalog.spots()[0].name, "DHA Phase 5 Lot");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/parkwise/spots.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_temp(".json", "{ not json");
        assert!(matches!(
            load_catalog(file.path()).unwrap_err(),
            CatalogError::Json(_)
        ));
    }

    #[test]
    fn empty_catalog_rejected() {
        let file = write_temp(".json", r#"{ "spots": [] }"#);
        assert!(matches!(
            load_catalog(file.path()).unwrap_err(),
            CatalogError::Empty(_)
        ));
    }

    #[test]
    fn invariant_violations_rejected() {
        let file = write_temp(
            ".json",
            r#"{ "spots": [
                { "id": 1, "name": "Overbooked", "price": 90, "available": 15, "total": 14,
                  "type": "covered", "coordinate": { "latitude": 0.0, "longitude": 0.0 } }
            ] }"#,
        );
        assert!(matches!(
            load_catalog(file.path()).unwrap_err(),
            CatalogError::InvalidSpot(_)
        ));
    }
}
