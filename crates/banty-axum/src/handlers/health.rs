//! Liveness and API index handlers. No auth, no state.

use axum::Json;
use serde_json::{Value, json};

/// `GET /api` - API index.
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Banty Car Accessories API",
        "docs": "Use /api/health, /api/products, etc."
    }))
}

/// `GET /api/health` - liveness payload.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Banty Car Accessories API",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
