//! Crop catalog models

use serde::{Deserialize, Serialize};

/// A single crop price record from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    /// Unique, stable identifier
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Market price per kilogram, never negative
    pub price_per_kg: f64,
    /// ISO-like currency code, e.g. "USD"
    pub currency: String,
    pub season: String,
    pub growth_duration: String,
}

/// The full catalog as served by `GET /api/crops`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropCatalog {
    pub crops: Vec<CropRecord>,
}

impl CropCatalog {
    /// Check the catalog invariants: pairwise-unique ids and
    /// non-negative prices.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for crop in &self.crops {
            if !seen.insert(crop.id) {
                return Err(format!("duplicate crop id {}", crop.id));
            }
            if crop.price_per_kg < 0.0 {
                return Err(format!(
                    "crop {} has negative price {}",
                    crop.id, crop.price_per_kg
                ));
            }
        }
        Ok(())
    }
}
