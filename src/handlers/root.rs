use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, SUCCESSFUL};
use crate::state::AppState;

pub const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET, POST /users",
    "GET, PUT, DELETE /users/:id",
    "GET /users/:id/favorites",
    "GET /characters",
    "GET /characters/:id",
    "GET /planets",
    "GET /planets/:id",
    "POST /favorites/:id/planet",
    "POST /favorites/:id/character",
    "DELETE /favorites/:id/planet/:planet_id",
    "DELETE /favorites/:id/character/:character_id",
];

/// GET / - service name, version and route index
pub async fn index() -> ApiResponse<Value> {
    ApiResponse::results(
        json!({
            "name": "Star Wars API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": ENDPOINTS,
        }),
        SUCCESSFUL,
    )
}

/// GET /health - 503 when the database does not answer
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(()) => ApiResponse::results(
            json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            }),
            SUCCESSFUL,
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ApiResponse::results(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                }),
                "Database unavailable",
            )
            .with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
