//! Catalog search filter
//!
//! The crop grid keeps the full dataset and recomputes a filtered view
//! synchronously whenever the search term changes. Matching is a
//! case-insensitive substring test against name OR category.

use crate::models::CropRecord;

/// Return the crops whose name or category contains `term`,
/// case-insensitively. An empty term matches everything.
pub fn filter_crops(crops: &[CropRecord], term: &str) -> Vec<CropRecord> {
    let needle = term.to_lowercase();
    crops
        .iter()
        .filter(|crop| {
            crop.name.to_lowercase().contains(&needle)
                || crop.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
