//! Shared helpers for controller and router tests.

use axum::response::Response;
use axum::Router;
use serde_json::Value;
use service::config::Config;
use service::AppState;
use std::env;

/// Every environment variable the configuration layer reads. Tests snapshot
/// and clear these so ambient shell state cannot leak into assertions.
const CONFIG_ENV_VARS: &[&str] = &[
    "CLIENT_ID",
    "CLIENT_SECRET",
    "REDIRECT_URI",
    "ZOOM_OAUTH_BASE_URL",
    "ZOOM_API_BASE_URL",
    "ALLOWED_ORIGINS",
    "PUBLIC_ASSETS_DIR",
    "INTERFACE",
    "PORT",
    "LOG_LEVEL_FILTER",
];

// Env-mutating tests also need to be marked #[serial] since the process
// environment is shared across threads.
pub struct EnvGuard {
    saved_vars: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Snapshots and removes all configuration variables so the test starts
    /// from a clean environment. The snapshot is restored on drop.
    pub fn clear_env() -> Self {
        let saved_vars = CONFIG_ENV_VARS
            .iter()
            .map(|name| (name.to_string(), env::var(name).ok()))
            .collect();

        for name in CONFIG_ENV_VARS {
            env::remove_var(name);
        }

        Self { saved_vars }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved_vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

/// Builds a configuration with populated client credentials and both Zoom
/// base URLs pointed at a mockito server.
pub fn config_with_mock_upstream(server_url: &str) -> Config {
    env::set_var("CLIENT_ID", "test_client_id");
    env::set_var("CLIENT_SECRET", "test_client_secret");
    env::set_var("REDIRECT_URI", "http://localhost:5500/callback");
    env::set_var("ZOOM_OAUTH_BASE_URL", server_url);
    env::set_var("ZOOM_API_BASE_URL", server_url);

    Config::default()
}

pub fn test_app(config: Config) -> Router {
    crate::router::define_routes(AppState::new(config))
}

pub async fn response_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&body).expect("response body should be JSON")
}
