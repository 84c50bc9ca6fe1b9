//! Web layer: the axum router, controllers, and the HTTP error surface.

use log::info;
use tokio::net::TcpListener;

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod extractors;
pub(crate) mod params;
pub(crate) mod response;
pub mod router;

#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) use error::Error;
pub use service::AppState;

/// Binds the configured interface and serves the API until the process is
/// stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = app_state.config.port;
    let address = format!("{interface}:{port}");

    let router = router::define_routes(app_state);

    let listener = TcpListener::bind(&address).await?;
    info!("Server starting... listening for connections on http://{address}");
    axum::serve(listener, router).await
}
