use axum::{extract::State, http::StatusCode};

use eventos_core::health::database_readiness;

use crate::state::AppState;

/// Handler for `GET /readyz`.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    database_readiness(&state.db).await
}
