//! Crop catalog service
//!
//! Loads the bundled crop price dataset from disk. The dataset is a
//! read-only fixture with no create/update/delete lifecycle; it is read
//! fresh on every request, so loading is idempotent and safely
//! retryable.

use shared::CropCatalog;

use crate::error::{AppError, AppResult};

/// Crop catalog service
#[derive(Clone)]
pub struct CatalogService {
    data_path: String,
}

impl CatalogService {
    pub fn new(data_path: String) -> Self {
        Self { data_path }
    }

    /// Load and parse the catalog. The underlying cause is logged; the
    /// caller only sees a generic failure message.
    pub fn load(&self) -> AppResult<CropCatalog> {
        let raw = std::fs::read_to_string(&self.data_path).map_err(|e| {
            tracing::error!("Error reading crops data from {}: {}", self.data_path, e);
            AppError::Internal("Failed to load crops data".to_string())
        })?;

        let catalog: CropCatalog = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Malformed crops data in {}: {}", self.data_path, e);
            AppError::Internal("Failed to load crops data".to_string())
        })?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_dataset() {
        let file = write_fixture(
            r#"{ "crops": [
                { "id": 1, "name": "Wheat", "category": "Grain", "pricePerKg": 0.55,
                  "currency": "USD", "season": "Winter", "growthDuration": "120 days" }
            ] }"#,
        );
        let service = CatalogService::new(file.path().to_string_lossy().into_owned());
        let catalog = service.load().unwrap();
        assert_eq!(catalog.crops.len(), 1);
        assert_eq!(catalog.crops[0].name, "Wheat");
    }

    #[test]
    fn missing_file_is_an_internal_error() {
        let service = CatalogService::new("data/does-not-exist.json".to_string());
        match service.load() {
            Err(AppError::Internal(msg)) => assert_eq!(msg, "Failed to load crops data"),
            _ => panic!("expected Internal error"),
        }
    }

    #[test]
    fn malformed_json_is_an_internal_error() {
        let file = write_fixture("{ not json");
        let service = CatalogService::new(file.path().to_string_lossy().into_owned());
        assert!(matches!(service.load(), Err(AppError::Internal(_))));
    }
}
