use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default Zoom OAuth base URL used when `ZOOM_OAUTH_BASE_URL` is not set.
pub const DEFAULT_ZOOM_OAUTH_BASE_URL: &str = "https://zoom.us";

/// Default Zoom REST API base URL used when `ZOOM_API_BASE_URL` is not set.
pub const DEFAULT_ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that are allowed to receive server responses,
    /// or `*` to allow any origin.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// The OAuth application client ID, shared with the frontend via `/config`.
    #[arg(long, env)]
    client_id: Option<String>,

    /// The OAuth application client secret. Never sent to clients.
    #[arg(long, env)]
    client_secret: Option<String>,

    /// The redirect URI registered with the OAuth application.
    #[arg(long, env)]
    redirect_uri: Option<String>,

    /// The base URL of the Zoom OAuth endpoint.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_OAUTH_BASE_URL)]
    zoom_oauth_base_url: String,

    /// The base URL of the Zoom REST API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_API_BASE_URL)]
    zoom_api_base_url: String,

    /// Directory of static frontend assets served when no API route matches.
    #[arg(long, env, default_value = "./public")]
    pub public_assets_dir: String,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 5500)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the OAuth client ID, if configured.
    pub fn client_id(&self) -> Option<String> {
        self.client_id.clone()
    }

    /// Returns the OAuth client secret, if configured.
    pub fn client_secret(&self) -> Option<String> {
        self.client_secret.clone()
    }

    /// Returns the registered redirect URI, if configured.
    pub fn redirect_uri(&self) -> Option<String> {
        self.redirect_uri.clone()
    }

    /// Returns the Zoom OAuth base URL.
    pub fn zoom_oauth_base_url(&self) -> &str {
        &self.zoom_oauth_base_url
    }

    /// Returns the Zoom REST API base URL.
    pub fn zoom_api_base_url(&self) -> &str {
        &self.zoom_api_base_url
    }

    /// Names the credential variables that are unset.
    ///
    /// The server keeps running without them; token exchange will fail
    /// upstream until an operator supplies the missing values.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push("CLIENT_ID");
        }
        if self.client_secret.is_none() {
            missing.push("CLIENT_SECRET");
        }
        if self.redirect_uri.is_none() {
            missing.push("REDIRECT_URI");
        }
        missing
    }
}
