//! # Generation Route Handlers
//!
//! Single and bulk description generation. A single request fails as a
//! whole; a bulk request reports failures per item and always answers with
//! one result per submitted product.

use super::{AppError, AppState};
use axum::{extract::State, Json};
use prodesc::{
    BulkDescriptionRequest, BulkDescriptionResponse, DescriptionRequest, DescriptionResponse,
};
use tracing::info;

/// Handler for `POST /api/v1/generate-description`.
pub async fn generate_description_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<DescriptionRequest>,
) -> Result<Json<DescriptionResponse>, AppError> {
    info!("Generating description for product: {}", payload.product_name);

    let description = app_state.generator.generate_description(&payload).await?;

    Ok(Json(DescriptionResponse::success(
        payload.product_name,
        description,
    )))
}

/// Handler for `POST /api/v1/generate-bulk`.
pub async fn generate_bulk_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<BulkDescriptionRequest>,
) -> Json<BulkDescriptionResponse> {
    let results = app_state.generator.generate_bulk(&payload.products).await;

    Json(BulkDescriptionResponse { results })
}
