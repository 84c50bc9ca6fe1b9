//! Controller for the OAuth token exchange.
//!
//! The frontend posts the one-time authorization code it received from Zoom's
//! consent redirect; the server trades it for a token payload using the
//! application credentials and returns Zoom's response as-is.

use crate::error::ErrorBody;
use crate::params::oauth::TokenExchangeParams;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::gateway::zoom;

const EXCHANGE_FAILED: &str = "Token exchange failed";

/// POST /oauth/token
///
/// Exchanges an authorization code for Zoom's token payload. The payload is
/// passed through verbatim so the frontend sees whatever Zoom granted.
#[utoipa::path(
    post,
    path = "/oauth/token",
    request_body = TokenExchangeParams,
    responses(
        (status = 200, description = "Token payload exactly as returned by Zoom"),
        (status = 400, description = "Missing authorization code", body = ErrorBody),
        (status = 500, description = "Exchange failed before reaching Zoom", body = ErrorBody)
    )
)]
pub async fn exchange(
    State(app_state): State<AppState>,
    body: Option<Json<TokenExchangeParams>>,
) -> Result<impl IntoResponse, Error> {
    // An unreadable body, a missing field and an empty code all count as
    // missing; none of them reach the upstream.
    let code = body
        .and_then(|Json(params)| params.code)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| Error::input("Missing authorization code"))?;

    let client = zoom::Client::from_config(&app_state.config)
        .map_err(|e| Error::upstream(EXCHANGE_FAILED, e))?;
    let payload = client
        .exchange_code(&code)
        .await
        .map_err(|e| Error::upstream(EXCHANGE_FAILED, e))?;

    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{config_with_mock_upstream, response_json, test_app, EnvGuard};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    fn token_request(body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/oauth/token")
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_exchange_passes_token_payload_through() {
        let _guard = EnvGuard::clear_env();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .match_query(mockito::Matcher::UrlEncoded(
                "code".into(),
                "test_code".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"abc","expires_in":3600}"#)
            .create_async()
            .await;
        let app = test_app(config_with_mock_upstream(&server.url()));

        let response = app
            .oneshot(token_request(Body::from(r#"{"code":"test_code"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({"access_token": "abc", "expires_in": 3600})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_code_is_rejected_without_upstream_call() {
        let _guard = EnvGuard::clear_env();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .expect(0)
            .create_async()
            .await;
        let app = test_app(config_with_mock_upstream(&server.url()));

        for body in [
            Body::from(r#"{}"#),
            Body::from(r#"{"code":""}"#),
            Body::from(r#"{"code":null}"#),
            Body::from("not json"),
        ] {
            let response = app
                .clone()
                .oneshot(token_request(body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response_json(response).await,
                json!({"error": "Missing authorization code"})
            );
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_body_is_rejected() {
        let _guard = EnvGuard::clear_env();
        let server = mockito::Server::new_async().await;
        let app = test_app(config_with_mock_upstream(&server.url()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/oauth/token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({"error": "Missing authorization code"})
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_upstream_rejection_is_proxied_with_detail() {
        let _guard = EnvGuard::clear_env();
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reason":"Invalid authorization code","error":"invalid_grant"}"#)
            .create_async()
            .await;
        let app = test_app(config_with_mock_upstream(&server.url()));

        let response = app
            .oneshot(token_request(Body::from(r#"{"code":"expired"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({
                "error": "Token exchange failed",
                "detail": "Invalid authorization code",
            })
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_unreachable_upstream_becomes_500() {
        let _guard = EnvGuard::clear_env();
        // Nothing listens on port 1 without root privileges
        let app = test_app(config_with_mock_upstream("http://127.0.0.1:1"));

        let response = app
            .oneshot(token_request(Body::from(r#"{"code":"any"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Token exchange failed");
        assert!(body["detail"].is_string());
    }
}
