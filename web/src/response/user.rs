//! User profile response DTO
//!
//! Projects Zoom's `users/me` payload down to the fields the frontend
//! renders, with the display name derived here rather than upstream.

use domain::gateway::zoom::UserResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Reduced profile of the user the access token belongs to. Fields Zoom did
/// not populate are omitted.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name built from the first and last name; empty when Zoom
    /// supplies neither
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Zoom account type (1 basic, 2 licensed, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_meeting_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi: Option<i64>,

    /// Avatar URL; Zoom populates either `profile_pic_url` or `pic_url`
    /// depending on account age, so both are consulted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<UserResponse> for UserProfile {
    fn from(user: UserResponse) -> Self {
        let name = format!(
            "{} {}",
            user.first_name.as_deref().unwrap_or_default(),
            user.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        let profile_pic_url = user
            .profile_pic_url
            .filter(|url| !url.is_empty())
            .or(user.pic_url);

        Self {
            id: user.id,
            name,
            email: user.email,
            verified: user.verified,
            timezone: user.timezone,
            user_type: user.user_type,
            personal_meeting_id: user.personal_meeting_id,
            pmi: user.pmi,
            profile_pic_url,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
