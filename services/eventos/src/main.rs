use axum::ServiceExt;
use axum::extract::Request;
use sea_orm::Database;
use tracing::info;

use eventos::config::EventosConfig;
use eventos::router::build_app;
use eventos::state::AppState;
use eventos_auth_types::identity::JwtSecret;
use eventos_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = EventosConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
        access_token_ttl_secs: config.access_token_ttl_secs,
    };

    let app = build_app(state);
    let addr = format!("0.0.0.0:{}", config.eventos_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("eventos service listening on {addr}");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("server error");
}
