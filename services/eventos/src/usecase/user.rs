use chrono::Utc;

use eventos_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::domain::validation::{canonical_cpf, validate_email, validate_username};
use crate::error::EventosServiceError;
use crate::infra::password::hash_password;

fn check_user_fields(user: &User) -> Result<(), EventosServiceError> {
    if !validate_username(&user.username) {
        return Err(EventosServiceError::validation(
            "username must be 1-150 letters, digits or @/./+/-/_",
        ));
    }
    if !validate_email(&user.email) {
        return Err(EventosServiceError::validation("email is not valid"));
    }
    Ok(())
}

fn normalize_cpf(cpf: &str) -> Result<String, EventosServiceError> {
    canonical_cpf(cpf).ok_or_else(|| EventosServiceError::validation("cpf must contain 11 digits"))
}

fn check_password(password: &str) -> Result<(), EventosServiceError> {
    if password.is_empty() {
        return Err(EventosServiceError::validation("password must not be blank"));
    }
    Ok(())
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, EventosServiceError> {
        check_password(&input.password)?;
        let cpf = normalize_cpf(&input.cpf)?;
        let now = Utc::now();
        let mut user = User {
            id: UserId::new(),
            username: input.username,
            cpf,
            email: input.email,
            password_hash: String::new(),
            first_name: input.first_name,
            last_name: input.last_name,
            created_at: now,
            updated_at: now,
        };
        check_user_fields(&user)?;

        if self.repo.find_by_username(&user.username).await?.is_some() {
            return Err(EventosServiceError::UsernameTaken);
        }
        if self.repo.find_by_cpf(&user.cpf).await?.is_some() {
            return Err(EventosServiceError::CpfTaken);
        }

        user.password_hash = hash_password(input.password).await?;
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, EventosServiceError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: UserId) -> Result<User, EventosServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(EventosServiceError::UserNotFound)
    }
}

// ── UpdateUser (PUT and PATCH) ───────────────────────────────────────────────

/// Fields to change. PUT supplies every field; PATCH any non-empty subset.
#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserInput {
    fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.cpf.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

impl From<CreateUserInput> for UpdateUserInput {
    fn from(input: CreateUserInput) -> Self {
        Self {
            username: Some(input.username),
            cpf: Some(input.cpf),
            email: Some(input.email),
            password: Some(input.password),
            first_name: Some(input.first_name),
            last_name: Some(input.last_name),
        }
    }
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    /// Only the account itself may change it; any other `id` is reported as
    /// missing.
    pub async fn execute(
        &self,
        caller: UserId,
        id: UserId,
        input: UpdateUserInput,
    ) -> Result<User, EventosServiceError> {
        if caller != id {
            return Err(EventosServiceError::UserNotFound);
        }
        if input.is_empty() {
            return Err(EventosServiceError::MissingData);
        }
        if let Some(password) = &input.password {
            check_password(password)?;
        }

        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(EventosServiceError::UserNotFound)?;

        if let Some(username) = input.username {
            if username != user.username {
                if let Some(other) = self.repo.find_by_username(&username).await? {
                    if other.id != id {
                        return Err(EventosServiceError::UsernameTaken);
                    }
                }
            }
            user.username = username;
        }
        if let Some(cpf) = input.cpf {
            let cpf = normalize_cpf(&cpf)?;
            if cpf != user.cpf {
                if let Some(other) = self.repo.find_by_cpf(&cpf).await? {
                    if other.id != id {
                        return Err(EventosServiceError::CpfTaken);
                    }
                }
            }
            user.cpf = cpf;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        check_user_fields(&user)?;

        if let Some(password) = input.password {
            user.password_hash = hash_password(password).await?;
        }
        user.updated_at = Utc::now();
        self.repo.update(&user).await?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, caller: UserId, id: UserId) -> Result<(), EventosServiceError> {
        if caller != id {
            return Err(EventosServiceError::UserNotFound);
        }
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(EventosServiceError::UserNotFound);
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
