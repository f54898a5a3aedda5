use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use eventos::router::{build_app, build_router};
use eventos::state::AppState;
use eventos_auth_types::identity::JwtSecret;
use eventos_domain::id::{EventId, UserId, VenueId};
use eventos_testing::auth::{MockAuth, TEST_JWT_SECRET};

/// State whose database is never reachable; only paths that fail or finish
/// before touching the store are exercised here.
fn offline_state() -> AppState {
    AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        access_token_ttl_secs: 3600,
    }
}

fn server() -> TestServer {
    TestServer::new(build_router(offline_state())).unwrap()
}

fn bearer(auth: &MockAuth) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", auth.token())).unwrap()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_liveness() {
    let response = server().get("/healthz").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let response = server().get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_echo_request_id() {
    let response = server().get("/healthz").await;
    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn should_return_json_not_found_for_unknown_route() {
    let response = server().get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "NOT_FOUND");
}

// ── Authentication ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_require_token_on_scoped_routes() {
    let server = server();
    for path in ["/locais", "/eventos", "/custos"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["kind"], "NOT_AUTHENTICATED", "path {path}");
    }
    let response = server
        .get(&format!("/eventos/{}/custos", EventId::new()))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let mut auth = MockAuth::new(UserId::new());
    auth.secret = "some-other-secret".into();
    let response = server()
        .get("/locais")
        .add_header(AUTHORIZATION, bearer(&auth))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unauthenticated_write_before_reading_body() {
    let response = server()
        .post("/locais")
        .json(&json!({ "name": "Salão Azul" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_require_token_to_change_an_account() {
    let server = server();
    let path = format!("/usuarios/{}", UserId::new());

    let response = server
        .patch(&path)
        .json(&json!({ "password": "taken-over" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .put(&path)
        .json(&json!({
            "username": "intruder",
            "cpf": "12345678910",
            "email": "intruder@example.com",
            "password": "taken-over",
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server.delete(&path).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_hide_other_accounts_from_changes() {
    let auth = MockAuth::new(UserId::new());
    let server = server();
    let path = format!("/usuarios/{}", UserId::new());

    let response = server
        .patch(&path)
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({ "password": "taken-over" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "USER_NOT_FOUND");

    let response = server
        .delete(&path)
        .add_header(AUTHORIZATION, bearer(&auth))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_let_account_reach_its_own_record() {
    let user_id = UserId::new();
    let auth = MockAuth::new(user_id);
    let response = server()
        .patch(&format!("/usuarios/{user_id}"))
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

// ── Body validation ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_body_missing_fields() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .post("/locais")
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({ "name": "Salão Azul" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "BAD_REQUEST");
}

#[tokio::test]
async fn should_reject_non_json_body() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .post("/custos")
        .add_header(AUTHORIZATION, bearer(&auth))
        .text("amount=10")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_event_ending_before_it_starts() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .post("/eventos")
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({
            "venue_id": VenueId::new().to_string(),
            "title": "Festa de Natal",
            "budget": "1000.00",
            "start_time": "2024-12-25T10:00:00Z",
            "end_time": "2024-12-24T10:00:00Z",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["message"], "end_time must not be earlier than start_time");
}

#[tokio::test]
async fn should_reject_unknown_event_status() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .post("/eventos")
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({
            "venue_id": VenueId::new().to_string(),
            "title": "Festa de Natal",
            "budget": "1000.00",
            "status": "POSTPONED",
            "start_time": "2024-12-25T10:00:00Z",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_amount_with_three_decimals() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .post("/custos")
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({
            "event_id": EventId::new().to_string(),
            "description": "Buffet",
            "amount": "10.005",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn should_reject_empty_patch() {
    let auth = MockAuth::new(UserId::new());
    let response = server()
        .patch(&format!("/eventos/{}", EventId::new()))
        .add_header(AUTHORIZATION, bearer(&auth))
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_malformed_path_id_with_json_envelope() {
    let auth = MockAuth::new(UserId::new());
    let server = server();
    for path in [
        "/locais/abc",
        "/eventos/abc",
        "/eventos/abc/custos",
        "/custos/abc",
    ] {
        let response = server
            .get(path)
            .add_header(AUTHORIZATION, bearer(&auth))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["kind"], "BAD_REQUEST", "path {path}");
    }
    let response = server.get("/usuarios/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "BAD_REQUEST");
}

// ── Trailing slash ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_route_paths_with_trailing_slash() {
    let app = build_app(offline_state());
    let request = Request::builder()
        .uri("/eventos/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
