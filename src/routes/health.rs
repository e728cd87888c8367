use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness only: reports healthy whether or not any price data exists yet.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
