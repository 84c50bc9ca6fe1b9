use log::{error, warn};
use service::{config::Config, logging::Logger};
use web::AppState;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        warn!(
            "Missing configuration for {}; the OAuth flow will fail until these are set",
            missing.join(", ")
        );
    }

    let app_state = AppState::new(config);

    if let Err(e) = web::init_server(app_state).await {
        error!("Failed to serve the API: {e}");
        std::process::exit(1);
    }
}
