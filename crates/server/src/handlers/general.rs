//! # General Route Handlers
//!
//! Liveness and health endpoints. Both return static payloads and never touch
//! the generation backend.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Product Description Generator API";
pub const API_VERSION: &str = "1.0.0";

#[derive(Serialize, Deserialize, Debug)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
    })
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
