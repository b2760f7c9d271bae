//! Catalog artifact loading
//!
//! The catalog is a static CSV read once at startup. Rows are deserialized
//! with serde; a row that fails to parse is a hard error (the artifact is
//! produced by an upstream cleaning step and is expected to be complete).
//! A row whose name cannot yield a brand is kept, brandless, with a warning.

use std::path::Path;

use crate::catalog::entry::{CatalogEntry, CatalogRecord};
use crate::catalog::Catalog;
use crate::error::EstimatorError;

/// Load the catalog CSV from `path`
///
/// # Errors
///
/// Returns `EstimatorError::DataError` if the file cannot be opened, any row
/// fails to deserialize, or the catalog contains no rows.
pub fn load_catalog(path: &Path) -> Result<Catalog, EstimatorError> {
    log::debug!("Loading catalog from: {}", path.display());

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        EstimatorError::DataError(format!("failed to open {}: {}", path.display(), e))
    })?;

    let mut entries = Vec::new();
    for (index, record) in reader.deserialize::<CatalogRecord>().enumerate() {
        let record = record.map_err(|e| {
            EstimatorError::DataError(format!("row {}: {}", index + 1, e))
        })?;
        let entry = CatalogEntry::from(record);
        if entry.brand.is_none() {
            log::warn!(
                "row {}: no brand derivable from name {:?}",
                index + 1,
                entry.name_model
            );
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(EstimatorError::DataError("catalog is empty".to_string()));
    }

    log::debug!("Loaded {} catalog rows", entries.len());
    Ok(Catalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "name_model,car_location,transmission,price_segment,km_driven,avg_tyre_life%,fuel_tank_capacity,displacement,mileage,bootspace,seating_capacity,no_of_owner,car_age";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_load_parses_rows_and_brands() {
        let file = write_csv(&[
            "2017 Maruti Swift VXI,Mumbai,Manual,Budget,52000,72,42,1197,21.2,268,5,1,7",
            "2019 Hyundai Creta SX,Delhi,Automatic,Mid-Range,30000,80,50,1493,17.0,433,5,1,5",
        ]);
        let catalog = load_catalog(file.path()).expect("load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].brand.as_deref(), Some("Maruti"));
        assert_eq!(catalog.entries()[1].brand.as_deref(), Some("Hyundai"));
        assert!((catalog.entries()[0].mileage - 21.2).abs() < 1e-9);
    }

    #[test]
    fn test_brandless_row_is_kept() {
        let file = write_csv(&[
            "Swift,Mumbai,Manual,Budget,52000,72,42,1197,21.2,268,5,1,7",
        ]);
        let catalog = load_catalog(file.path()).expect("load");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.entries()[0].brand.is_none());
    }

    #[test]
    fn test_empty_catalog_is_error() {
        let file = write_csv(&[]);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, EstimatorError::DataError(_)));
    }

    #[test]
    fn test_malformed_row_is_error() {
        let file = write_csv(&[
            "2017 Maruti Swift VXI,Mumbai,Manual,Budget,not_a_number,72,42,1197,21.2,268,5,1,7",
        ]);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, EstimatorError::DataError(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_catalog(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert!(matches!(err, EstimatorError::DataError(_)));
    }
}
