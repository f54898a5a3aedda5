use eventos_auth_types::token::ACCESS_TOKEN_TTL_SECS;

/// Eventos service configuration loaded from environment variables.
#[derive(Debug)]
pub struct EventosConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `EVENTOS_PORT`.
    pub eventos_port: u16,
    /// HS256 secret for access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Access-token lifetime in seconds (default 4h). Env var: `ACCESS_TOKEN_TTL_SECS`.
    pub access_token_ttl_secs: u64,
}

impl EventosConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            eventos_port: std::env::var("EVENTOS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            access_token_ttl_secs: std::env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ACCESS_TOKEN_TTL_SECS),
        }
    }
}
