use crate::controller::{
    config_controller, health_check_controller, meeting_controller, oauth_controller,
    user_controller,
};
use crate::{error, params, response, AppState};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use log::warn;
use service::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI docs. To be a part
// of the rendered docs, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Zoom OAuth Proxy API"
        ),
        paths(
            config_controller::read,
            health_check_controller::health_check,
            meeting_controller::index,
            oauth_controller::exchange,
            user_controller::read,
        ),
        components(
            schemas(
                error::ErrorBody,
                params::oauth::TokenExchangeParams,
                response::config::PublicConfig,
                response::meeting::MeetingsResponse,
                response::meeting::MeetingSummary,
                response::user::UserProfile,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "zoom_oauth_proxy", description = "Zoom OAuth code exchange and resource proxy API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Documents the Zoom bearer token requirement for gaining access to the
// proxied resource endpoints for OpenAPI.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(config_routes(app_state.clone()))
        .merge(health_routes())
        .merge(meeting_routes(app_state.clone()))
        .merge(oauth_routes(app_state.clone()))
        .merge(user_routes(app_state.clone()))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes(&app_state.config.public_assets_dir))
        .layer(cors_layer(&app_state.config))
}

fn config_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/config", get(config_controller::read))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn meeting_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/meetings", get(meeting_controller::index))
        .with_state(app_state)
}

fn oauth_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/oauth/token", post(oauth_controller::exchange))
        .with_state(app_state)
}

fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/user", get(user_controller::read))
        .with_state(app_state)
}

// Origins are matched verbatim against the Origin header, with "*" opening
// the API up to any origin.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping unparseable allowed origin {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

// This will serve the demo frontend plus anything else dropped into the
// configured public assets directory.
pub fn static_routes(public_assets_dir: &str) -> Router {
    Router::new().nest_service("/", ServeDir::new(public_assets_dir))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{test_app, EnvGuard};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serial_test::serial;
    use service::config::Config;
    use std::env;
    use tower::ServiceExt;

    fn request_with_origin(uri: &str, origin: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_default_cors_allows_any_origin() {
        let _guard = EnvGuard::clear_env();
        let app = test_app(Config::default());

        let response = app
            .oneshot(request_with_origin("/health", "http://anywhere.example"))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_configured_origins_are_mirrored_back() {
        let _guard = EnvGuard::clear_env();
        env::set_var(
            "ALLOWED_ORIGINS",
            "http://localhost:3000,https://app.example.com",
        );
        let app = test_app(Config::default());

        let allowed = app
            .clone()
            .oneshot(request_with_origin("/health", "http://localhost:3000"))
            .await
            .unwrap();
        assert_eq!(
            allowed
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:3000")
        );

        let denied = app
            .oneshot(request_with_origin("/health", "http://evil.example"))
            .await
            .unwrap();
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_paths_fall_through_to_static_handler() {
        let _guard = EnvGuard::clear_env();
        let app = test_app(Config::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/definitely-not-a-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
