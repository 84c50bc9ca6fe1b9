use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET a liveness signal for deploy checks
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = String)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
