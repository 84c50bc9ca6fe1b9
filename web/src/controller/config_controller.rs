//! Controller exposing the public OAuth configuration.

use crate::response::config::PublicConfig;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// GET /config
///
/// Public OAuth settings the frontend needs to start the authorization flow.
/// Unset values are omitted rather than reported as an error; the startup log
/// is where operators learn about missing credentials.
#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Client ID and redirect URI for the frontend", body = PublicConfig)
    )
)]
pub async fn read(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(PublicConfig::from(&app_state.config))
}
