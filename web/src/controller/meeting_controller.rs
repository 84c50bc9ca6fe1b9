//! Controller proxying the current user's upcoming Zoom meetings.

use crate::error::ErrorBody;
use crate::extractors::bearer_token::BearerToken;
use crate::response::meeting::MeetingsResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::gateway::zoom;

const FETCH_FAILED: &str = "Failed to fetch meetings";

/// GET /meetings
///
/// Lists the next few upcoming meetings for the token's user.
#[utoipa::path(
    get,
    path = "/meetings",
    responses(
        (status = 200, description = "Upcoming meetings for the token's user", body = MeetingsResponse),
        (status = 401, description = "Missing Bearer token", body = ErrorBody),
        (status = 500, description = "Meeting lookup failed", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    BearerToken(access_token): BearerToken,
) -> Result<impl IntoResponse, Error> {
    let client = zoom::Client::from_config(&app_state.config)
        .map_err(|e| Error::upstream(FETCH_FAILED, e))?;
    let listing = client
        .upcoming_meetings(&access_token)
        .await
        .map_err(|e| Error::upstream(FETCH_FAILED, e))?;

    Ok(Json(MeetingsResponse::from(listing)))
}
