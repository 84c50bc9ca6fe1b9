use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind};
use log::*;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body every error response carries. `detail` only appears for
/// upstream failures, where it holds the provider's reason/message text or
/// the local error description.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    Web(WebErrorKind),
    /// An upstream call failed; `message` is the route-specific summary shown
    /// to the caller.
    Upstream {
        message: &'static str,
        source: DomainError,
    },
}

#[derive(Debug)]
pub enum WebErrorKind {
    Input(&'static str),
    Auth(&'static str),
}

impl Error {
    pub fn input(message: &'static str) -> Self {
        Error::Web(WebErrorKind::Input(message))
    }

    pub fn auth(message: &'static str) -> Self {
        Error::Web(WebErrorKind::Auth(message))
    }

    pub fn upstream(message: &'static str, source: DomainError) -> Self {
        Error::Upstream { message, source }
    }
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Web(WebErrorKind::Input(message)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: message.to_string(),
                    detail: None,
                }),
            )
                .into_response(),
            Error::Web(WebErrorKind::Auth(message)) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    error: message.to_string(),
                    detail: None,
                }),
            )
                .into_response(),
            Error::Upstream { message, source } => {
                let (status, detail) = upstream_response_parts(&source);
                error!("{message}: {detail}");
                (
                    status,
                    Json(ErrorBody {
                        error: message.to_string(),
                        detail: Some(detail),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Maps a domain error to the proxied status and detail text: upstream HTTP
/// failures keep their status and extracted message, everything else
/// collapses to 500 with the local error description.
fn upstream_response_parts(error: &DomainError) -> (StatusCode, String) {
    match &error.error_kind {
        DomainErrorKind::External(ExternalErrorKind::Api { status, message }) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message.clone(),
        ),
        DomainErrorKind::External(ExternalErrorKind::Network) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            source_message(error, "upstream request failed"),
        ),
        DomainErrorKind::External(ExternalErrorKind::Other(message)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
        }
        DomainErrorKind::Internal(message) => {
            (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
        }
    }
}

fn source_message(error: &DomainError, fallback: &str) -> String {
    error
        .source
        .as_ref()
        .map(|source| source.to_string())
        .unwrap_or_else(|| fallback.to_string())
}
