//! Public configuration response DTO

use serde::Serialize;
use service::config::Config;
use utoipa::ToSchema;

/// The subset of configuration the frontend may see. The client secret never
/// leaves the server.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    /// OAuth application client ID, omitted when unconfigured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Redirect URI registered with the OAuth application, omitted when unconfigured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl From<&Config> for PublicConfig {
    fn from(config: &Config) -> Self {
        Self {
            client_id: config.client_id(),
            redirect_uri: config.redirect_uri(),
        }
    }
}
