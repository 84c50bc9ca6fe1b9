use crate::Error;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The caller's access token, stripped of its `Bearer ` prefix.
pub(crate) struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Error;

    // Protected routes reject up front; no upstream call is made without a
    // well-formed Authorization header.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match bearer_token(header) {
            Some(token) => Ok(BearerToken(token.to_string())),
            None => Err(Error::auth("Missing Bearer token")),
        }
    }
}

/// Pure prefix check shared by every protected route: anything that does not
/// start with the literal `Bearer ` is rejected.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}
