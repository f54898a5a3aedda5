//! Mock auth helpers for router tests.
//!
//! Scoped routes require `Authorization: Bearer <jwt>`. `MockAuth` signs a real
//! token with a test secret so requests pass the `Identity` extractor without a
//! login round-trip.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

use eventos_auth_types::token::issue_access_token;
use eventos_domain::id::UserId;

/// Secret shared by `MockAuth` and the router state built in tests.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: UserId,
    pub secret: String,
}

impl MockAuth {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            secret: TEST_JWT_SECRET.to_owned(),
        }
    }

    /// Sign a one-hour token for this identity.
    pub fn token(&self) -> String {
        let (token, _) = issue_access_token(self.user_id, &self.secret, 3600).unwrap();
        token
    }

    /// Return headers as a logged-in client would send them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap(),
        );
        map
    }
}
