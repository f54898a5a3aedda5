use eventos_auth_types::identity::JwtSecret;
use eventos_auth_types::token::issue_access_token;

use crate::domain::repository::UserRepository;
use crate::error::EventosServiceError;
use crate::infra::password::verify_password;

// ── CreateToken (login) ──────────────────────────────────────────────────────

pub struct CreateTokenInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    /// Expiry, seconds since UNIX epoch.
    pub expires_at: u64,
}

pub struct CreateTokenUseCase<R: UserRepository> {
    pub users: R,
    pub jwt_secret: JwtSecret,
    pub ttl_secs: u64,
}

impl<R: UserRepository> CreateTokenUseCase<R> {
    /// Unknown username and wrong password fail the same way.
    pub async fn execute(&self, input: CreateTokenInput) -> Result<IssuedToken, EventosServiceError> {
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(EventosServiceError::InvalidCredentials)?;
        if !verify_password(input.password, user.password_hash.clone()).await? {
            return Err(EventosServiceError::InvalidCredentials);
        }

        let (access_token, expires_at) =
            issue_access_token(user.id, self.jwt_secret.as_str(), self.ttl_secs)
                .map_err(|e| EventosServiceError::Internal(e.into()))?;
        tracing::info!(user_id = %user.id, "access token issued");
        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}
