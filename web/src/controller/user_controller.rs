//! Controller proxying the current user's Zoom profile.

use crate::error::ErrorBody;
use crate::extractors::bearer_token::BearerToken;
use crate::response::user::UserProfile;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::gateway::zoom;

const FETCH_FAILED: &str = "Failed to fetch user";

/// GET /user
///
/// Fetches `users/me` with the caller's bearer token and returns the reduced
/// profile the frontend renders.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Projected profile of the token's user", body = UserProfile),
        (status = 401, description = "Missing Bearer token", body = ErrorBody),
        (status = 500, description = "Profile lookup failed", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn read(
    State(app_state): State<AppState>,
    BearerToken(access_token): BearerToken,
) -> Result<impl IntoResponse, Error> {
    let client = zoom::Client::from_config(&app_state.config)
        .map_err(|e| Error::upstream(FETCH_FAILED, e))?;
    let user = client
        .current_user(&access_token)
        .await
        .map_err(|e| Error::upstream(FETCH_FAILED, e))?;

    Ok(Json(UserProfile::from(user)))
}
