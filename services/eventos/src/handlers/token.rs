use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use eventos_core::json::ValidJson;

use crate::error::EventosServiceError;
use crate::state::AppState;
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase};

// ── POST /auth/token ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: u64,
}

pub async fn create_token(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateTokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), EventosServiceError> {
    let usecase = CreateTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        ttl_secs: state.access_token_ttl_secs,
    };
    let token = usecase
        .execute(CreateTokenInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token: token.access_token,
            token_type: "Bearer",
            expires_at: token.expires_at,
        }),
    ))
}
