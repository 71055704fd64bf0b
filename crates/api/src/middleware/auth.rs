//! Caller identity for the contact routes.
//!
//! Every `/api/contacts` handler names [`AuthUser`] as its first argument.
//! The caller's id comes from the `sub` claim of an HS256 bearer token, and
//! a request that cannot be attributed to a user never reaches the store.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use contacts_core::error::CoreError;
use contacts_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

pub const MSG_MISSING_HEADER: &str = "Missing Authorization header";
pub const MSG_BAD_SCHEME: &str = "Invalid Authorization format. Expected: Bearer <token>";
pub const MSG_BAD_TOKEN: &str = "Invalid or expired token";

/// The user a request acts on behalf of. Contacts are created under, and
/// mutated only by, this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: DbId,
}

/// Pull the raw token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, CoreError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized(MSG_MISSING_HEADER.into()))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| CoreError::Unauthorized(MSG_BAD_SCHEME.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| CoreError::Unauthorized(MSG_BAD_TOKEN.into()))?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert_matches!(
            bearer_token(&HeaderMap::new()),
            Err(CoreError::Unauthorized(msg)) if msg == MSG_MISSING_HEADER
        );
    }

    #[test]
    fn other_scheme_is_unauthorized() {
        assert_matches!(
            bearer_token(&headers_with("Basic dXNlcjpwYXNz")),
            Err(CoreError::Unauthorized(msg)) if msg == MSG_BAD_SCHEME
        );
    }
}
