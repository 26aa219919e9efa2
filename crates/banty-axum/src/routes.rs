//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AppContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Upper bound for a whole multipart request: 10 image files of 5 MiB
/// plus form fields and framing.
const MAX_UPLOAD_BODY_BYTES: usize = 56 * 1024 * 1024;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use axum::http::Method;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
        Method::PATCH,
    ];
    let headers = [
        CONTENT_TYPE,
        AUTHORIZATION,
        HeaderName::from_static("x-admin-token"),
    ];

    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(methods)
                .allow_headers(headers)
        }
    }
}

/// All API routes without the `/api` prefix (for nesting under `/api`).
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::api_index))
        .route("/health", get(handlers::health::health))
        .route("/auth/admin", post(handlers::auth::admin_login))
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/products/{id}",
            put(handlers::products::update).delete(handlers::products::remove),
        )
        .route("/enquiry", post(handlers::enquiry::submit_enquiry))
        .route("/contact", post(handlers::enquiry::submit_contact))
}

/// Create the main router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AppContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
        .fallback(route_not_found)
}

/// Unmatched routes answer 404 with the legacy body shape.
async fn route_not_found() -> (StatusCode, axum::Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({ "message": "Route not found" })),
    )
}
