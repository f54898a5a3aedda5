use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use eventos_auth_types::identity::Identity;
use eventos_core::json::ValidJson;
use eventos_core::path::ValidPath;
use eventos_domain::id::UserId;

use crate::domain::types::User;
use crate::error::EventosServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserInput, UpdateUserUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Body of `POST /usuarios` and `PUT /usuarios/{id}`.
#[derive(Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl From<UserRequest> for CreateUserInput {
    fn from(body: UserRequest) -> Self {
        Self {
            username: body.username,
            cpf: body.cpf,
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
        }
    }
}

#[derive(Deserialize)]
pub struct PatchUserRequest {
    pub username: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// The password hash never leaves the service.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub cpf: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            cpf: user.cpf,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /usuarios ───────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), EventosServiceError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /usuarios ────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, EventosServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /usuarios/{id} ───────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<UserId>,
) -> Result<Json<UserResponse>, EventosServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    Ok(Json(user.into()))
}

// ── PUT /usuarios/{id} ───────────────────────────────────────────────────────

pub async fn replace_user(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<UserId>,
    ValidJson(body): ValidJson<UserRequest>,
) -> Result<Json<UserResponse>, EventosServiceError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let input = UpdateUserInput::from(CreateUserInput::from(body));
    let user = usecase.execute(identity.user_id, id, input).await?;
    Ok(Json(user.into()))
}

// ── PATCH /usuarios/{id} ─────────────────────────────────────────────────────

pub async fn patch_user(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<UserId>,
    ValidJson(body): ValidJson<PatchUserRequest>,
) -> Result<Json<UserResponse>, EventosServiceError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            identity.user_id,
            id,
            UpdateUserInput {
                username: body.username,
                cpf: body.cpf,
                email: body.email,
                password: body.password,
                first_name: body.first_name,
                last_name: body.last_name,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── DELETE /usuarios/{id} ────────────────────────────────────────────────────

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<UserId>,
) -> Result<StatusCode, EventosServiceError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
