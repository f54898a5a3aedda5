use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use eventos_auth_types::identity::JwtSecret;

use crate::infra::db::{DbCostRepository, DbEventRepository, DbUserRepository, DbVenueRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub access_token_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn venue_repo(&self) -> DbVenueRepository {
        DbVenueRepository {
            db: self.db.clone(),
        }
    }

    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn cost_repo(&self) -> DbCostRepository {
        DbCostRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
