use serde::Deserialize;
use utoipa::ToSchema;

/// Body for the token exchange: the one-time authorization code Zoom's
/// consent screen handed to the frontend.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenExchangeParams {
    /// Authorization code from the OAuth redirect.
    pub code: Option<String>,
}
