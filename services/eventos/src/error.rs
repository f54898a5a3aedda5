use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Eventos service domain error variants.
///
/// Records owned by another user surface as the matching `*NotFound`, so a
/// caller cannot tell "not yours" from "does not exist".
#[derive(Debug, thiserror::Error)]
pub enum EventosServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("venue not found")]
    VenueNotFound,
    #[error("event not found")]
    EventNotFound,
    #[error("cost not found")]
    CostNotFound,
    #[error("username already taken")]
    UsernameTaken,
    #[error("cpf already registered")]
    CpfTaken,
    #[error("{0}")]
    ValidationFailed(String),
    #[error("missing data")]
    MissingData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EventosServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::VenueNotFound => "VENUE_NOT_FOUND",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::CostNotFound => "COST_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::CpfTaken => "CPF_TAKEN",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for EventosServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::VenueNotFound | Self::EventNotFound | Self::CostNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::UsernameTaken | Self::CpfTaken => StatusCode::CONFLICT,
            Self::ValidationFailed(_) | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes and already visible in the TraceLayer
        // span; only store/infra failures are logged here, with the anyhow chain.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
