//! HTTP handler for the crop catalog endpoint

use axum::{extract::State, Json};

use shared::CropCatalog;

use crate::error::AppResult;
use crate::services::CatalogService;
use crate::AppState;

/// Serve the bundled crop price catalog
/// GET /api/crops
pub async fn get_crops(State(state): State<AppState>) -> AppResult<Json<CropCatalog>> {
    let service = CatalogService::new(state.config.catalog.data_path.clone());
    let catalog = service.load()?;
    Ok(Json(catalog))
}
