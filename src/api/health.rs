use axum::Json;
use serde::Serialize;

const LIVENESS_MESSAGE: &str = "The service is up and running!";

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
}

pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
