//! Zoom OAuth and REST API client.
//!
//! This module provides the HTTP client for exchanging OAuth authorization
//! codes with Zoom and for the two authenticated lookups the proxy forwards:
//! the current user's profile and their upcoming meetings.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::*;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use service::config::Config;
use std::time::Duration;

/// Upstream requests that take longer than this are reported as failures.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How many upcoming meetings to request from Zoom.
const MEETINGS_PAGE_SIZE: u32 = 5;

/// User profile as returned by `GET /users/me`.
///
/// Zoom omits fields freely depending on account type, so everything is
/// optional and unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub verified: Option<i64>,
    pub timezone: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<i64>,
    pub personal_meeting_id: Option<i64>,
    pub pmi: Option<i64>,
    pub profile_pic_url: Option<String>,
    pub pic_url: Option<String>,
}

/// Subset of `GET /users/me/meetings` the proxy cares about. A payload
/// without a `meetings` key deserializes to an empty list.
#[derive(Debug, Deserialize)]
pub struct MeetingListResponse {
    #[serde(default)]
    pub meetings: Vec<MeetingResponse>,
}

/// One scheduled meeting from the meetings listing.
#[derive(Debug, Deserialize)]
pub struct MeetingResponse {
    pub id: Option<i64>,
    pub topic: Option<String>,
    pub start_time: Option<String>,
}

/// Configuration for the Zoom endpoints, split between the OAuth host and the
/// REST API host.
#[derive(Debug, Clone)]
pub struct ZoomUrls {
    pub oauth_base_url: String,
    pub api_base_url: String,
}

impl ZoomUrls {
    pub fn from_config(config: &Config) -> Self {
        Self {
            oauth_base_url: config.zoom_oauth_base_url().to_string(),
            api_base_url: config.zoom_api_base_url().to_string(),
        }
    }
}

/// Zoom API client covering the code exchange and resource lookups.
pub struct Client {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    urls: ZoomUrls,
}

impl Client {
    /// Create a new Zoom client with configurable URLs
    pub fn new(
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        urls: ZoomUrls,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: redirect_uri.to_string(),
            urls,
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// Missing credentials become empty strings so a misconfigured server
    /// still answers requests; the exchange then fails upstream instead of
    /// locally.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            &config.client_id().unwrap_or_default(),
            &config.client_secret().unwrap_or_default(),
            &config.redirect_uri().unwrap_or_default(),
            ZoomUrls::from_config(config),
        )
    }

    /// Exchange a one-time authorization code for Zoom's token payload.
    ///
    /// The token JSON is passed through verbatim; callers decide which parts
    /// to expose.
    pub async fn exchange_code(&self, code: &str) -> Result<Value, Error> {
        debug!("Exchanging authorization code for tokens");

        let request = self
            .http
            .post(format!("{}/oauth/token", self.urls.oauth_base_url))
            .header(AUTHORIZATION, self.basic_authorization()?)
            .query(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ]);

        let payload = self.call(request).await?;
        info!("Authorization code exchanged for tokens");
        Ok(payload)
    }

    /// Fetch the profile of the user the access token belongs to.
    pub async fn current_user(&self, access_token: &str) -> Result<UserResponse, Error> {
        let request = self
            .http
            .get(format!("{}/users/me", self.urls.api_base_url))
            .bearer_auth(access_token);

        let payload = self.call(request).await?;
        serde_json::from_value(payload).map_err(|e| invalid_response(e, "user profile"))
    }

    /// Fetch the next upcoming meetings for the token's user, preserving the
    /// order Zoom returns them in.
    pub async fn upcoming_meetings(&self, access_token: &str) -> Result<MeetingListResponse, Error> {
        let request = self
            .http
            .get(format!("{}/users/me/meetings", self.urls.api_base_url))
            .bearer_auth(access_token)
            .query(&[("type", "upcoming")])
            .query(&[("page_size", MEETINGS_PAGE_SIZE)]);

        let payload = self.call(request).await?;
        serde_json::from_value(payload).map_err(|e| invalid_response(e, "meeting list"))
    }

    /// Issues a prepared request and normalizes the outcome. A success body is
    /// returned as parsed JSON; a non-success status becomes an `Api` error
    /// carrying the upstream status and its `reason`/`message` text; requests
    /// that never produce a response become `Network` errors.
    async fn call(&self, request: reqwest::RequestBuilder) -> Result<Value, Error> {
        let response = request.send().await.map_err(|e| {
            warn!("Zoom request failed: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| {
                warn!("Failed to parse Zoom response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from Zoom".to_string(),
                    )),
                }
            })
        } else {
            let body: Value = response.json().await.unwrap_or_default();
            let message = upstream_error_message(status, &body);
            warn!("Zoom returned {}: {}", status, message);
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Api {
                    status: status.as_u16(),
                    message,
                }),
            })
        }
    }

    /// `Basic base64(client_id:client_secret)` header for the token exchange.
    fn basic_authorization(&self) -> Result<HeaderValue, Error> {
        let credentials = BASE64.encode(format!("{}:{}", self.client_id, self.client_secret));
        let mut header_value =
            HeaderValue::from_str(&format!("Basic {credentials}")).map_err(|e| {
                warn!("Failed to create auth header: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::Internal(
                        "Invalid client credentials".to_string(),
                    ),
                }
            })?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }
}

/// Best-effort human-readable message from a Zoom error body, preferring the
/// `reason` field over `message`.
fn upstream_error_message(status: StatusCode, body: &Value) -> String {
    body.get("reason")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Zoom request failed with status {status}"))
}

fn invalid_response(err: serde_json::Error, what: &str) -> Error {
    warn!("Failed to parse Zoom {what}: {err:?}");
    Error {
        source: Some(Box::new(err)),
        error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
            "Invalid response from Zoom".to_string(),
        )),
    }
}
