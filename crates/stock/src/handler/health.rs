use crate::domain::response::stock::HealthResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: "status ok".to_string(),
        }),
    )
}
