//! Meeting list response DTOs

use domain::gateway::zoom::{MeetingListResponse, MeetingResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Wrapper around the projected meeting list.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingsResponse {
    pub meetings: Vec<MeetingSummary>,
}

/// One upcoming meeting, reduced to what the frontend shows.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Scheduled start in Zoom's ISO 8601 format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl From<MeetingResponse> for MeetingSummary {
    fn from(meeting: MeetingResponse) -> Self {
        Self {
            id: meeting.id,
            topic: meeting.topic,
            start_time: meeting.start_time,
        }
    }
}

impl From<MeetingListResponse> for MeetingsResponse {
    fn from(listing: MeetingListResponse) -> Self {
        Self {
            meetings: listing.meetings.into_iter().map(Into::into).collect(),
        }
    }
}
