use eventos::error::EventosServiceError;
use eventos::usecase::token::{CreateTokenInput, CreateTokenUseCase};
use eventos::usecase::user::{CreateUserInput, CreateUserUseCase};
use eventos_auth_types::identity::JwtSecret;
use eventos_auth_types::token::{AuthError, validate_access_token};
use eventos_testing::auth::TEST_JWT_SECRET;

use crate::helpers::MemoryStore;

async fn store_with_user() -> (MemoryStore, eventos::domain::types::User) {
    let store = MemoryStore::new();
    let user = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(CreateUserInput {
        username: "ana".into(),
        cpf: "12345678910".into(),
        email: "ana@example.com".into(),
        password: "s3cret-pass".into(),
        first_name: String::new(),
        last_name: String::new(),
    })
    .await
    .unwrap();
    (store, user)
}

fn login(store: MemoryStore) -> CreateTokenUseCase<MemoryStore> {
    CreateTokenUseCase {
        users: store,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        ttl_secs: 3600,
    }
}

#[tokio::test]
async fn should_issue_token_for_valid_credentials() {
    let (store, user) = store_with_user().await;
    let token = login(store)
        .execute(CreateTokenInput {
            username: "ana".into(),
            password: "s3cret-pass".into(),
        })
        .await
        .unwrap();

    let info = validate_access_token(&token.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.expires_at, token.expires_at);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let (store, _) = store_with_user().await;
    let result = login(store)
        .execute(CreateTokenInput {
            username: "ana".into(),
            password: "wrong".into(),
        })
        .await;
    assert!(
        matches!(result, Err(EventosServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_username() {
    let (store, _) = store_with_user().await;
    let result = login(store)
        .execute(CreateTokenInput {
            username: "nobody".into(),
            password: "s3cret-pass".into(),
        })
        .await;
    assert!(matches!(result, Err(EventosServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_not_validate_with_other_secret() {
    let (store, _) = store_with_user().await;
    let token = login(store)
        .execute(CreateTokenInput {
            username: "ana".into(),
            password: "s3cret-pass".into(),
        })
        .await
        .unwrap();
    let result = validate_access_token(&token.access_token, "another-secret");
    assert!(matches!(result, Err(AuthError::InvalidSignature)));
}
