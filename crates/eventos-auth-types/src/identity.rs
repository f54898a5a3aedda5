//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;

use eventos_domain::id::UserId;

use crate::token::{AuthError, validate_access_token};

/// HS256 signing secret, pulled out of the router state with `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authenticated session identity taken from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 if the header is absent or the token fails validation.
/// Ownership checks happen later, in the use cases.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AuthError;

    // Validate synchronously so the returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(Authorization(bearer)) => validate_access_token(bearer.token(), secret.as_str()),
            None => Err(AuthError::Missing),
        };

        async move {
            let info = result?;
            Ok(Self {
                user_id: info.user_id,
            })
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "NOT_AUTHENTICATED",
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}
