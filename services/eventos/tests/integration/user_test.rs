use eventos::error::EventosServiceError;
use eventos::handlers::user::UserResponse;
use eventos::usecase::token::{CreateTokenInput, CreateTokenUseCase};
use eventos::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserInput, UpdateUserUseCase,
};
use eventos::usecase::venue::{CreateVenueUseCase, ListVenuesUseCase};
use eventos_auth_types::identity::JwtSecret;
use eventos_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{MemoryStore, venue_input};

fn input(username: &str, cpf: &str) -> CreateUserInput {
    CreateUserInput {
        username: username.into(),
        cpf: cpf.into(),
        email: format!("{username}@example.com"),
        password: "s3cret-pass".into(),
        first_name: "Ana".into(),
        last_name: "Silva".into(),
    }
}

#[tokio::test]
async fn should_create_and_fetch_user_without_exposing_password() {
    let store = MemoryStore::new();
    let user = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(input("ana", "123.456.789-10"))
    .await
    .unwrap();

    let fetched = GetUserUseCase {
        repo: store.clone(),
    }
    .execute(user.id)
    .await
    .unwrap();
    assert_eq!(fetched.username, "ana");

    let json = serde_json::to_value(UserResponse::from(fetched)).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("password_hash"));
    assert_eq!(json["cpf"], "12345678910");

    let users = ListUsersUseCase { repo: store }.execute().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_username_and_cpf() {
    let store = MemoryStore::new();
    let create = CreateUserUseCase {
        repo: store.clone(),
    };
    create.execute(input("ana", "12345678910")).await.unwrap();

    let result = create.execute(input("ana", "98765432100")).await;
    assert!(matches!(result, Err(EventosServiceError::UsernameTaken)));

    let result = create.execute(input("bruno", "12345678910")).await;
    assert!(matches!(result, Err(EventosServiceError::CpfTaken)));
}

#[tokio::test]
async fn should_treat_punctuated_cpf_as_the_same_tax_id() {
    let store = MemoryStore::new();
    let create = CreateUserUseCase {
        repo: store.clone(),
    };
    create.execute(input("ana", "12345678910")).await.unwrap();

    let result = create.execute(input("bia", "123.456.789-10")).await;
    assert!(matches!(result, Err(EventosServiceError::CpfTaken)));

    let bruno = create.execute(input("bruno", "987.654.321-00")).await.unwrap();
    let result = UpdateUserUseCase { repo: store }
        .execute(
            bruno.id,
            bruno.id,
            UpdateUserInput {
                cpf: Some("123.456.789-10".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(EventosServiceError::CpfTaken)));
}

#[tokio::test]
async fn should_reject_username_change_to_taken_name() {
    let store = MemoryStore::new();
    let create = CreateUserUseCase {
        repo: store.clone(),
    };
    create.execute(input("ana", "12345678910")).await.unwrap();
    let bruno = create.execute(input("bruno", "98765432100")).await.unwrap();

    let result = UpdateUserUseCase { repo: store }
        .execute(
            bruno.id,
            bruno.id,
            UpdateUserInput {
                username: Some("ana".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(EventosServiceError::UsernameTaken)));
}

#[tokio::test]
async fn should_replace_all_fields_and_rehash_password() {
    let store = MemoryStore::new();
    let user = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(input("ana", "12345678910"))
    .await
    .unwrap();

    let mut replacement = input("ana.maria", "12345678910");
    replacement.password = "new-pass".into();
    replacement.last_name = "Souza".into();
    let updated = UpdateUserUseCase { repo: store }
        .execute(user.id, user.id, replacement.into())
        .await
        .unwrap();
    assert_eq!(updated.username, "ana.maria");
    assert_eq!(updated.last_name, "Souza");
    assert_ne!(updated.password_hash, user.password_hash);
    assert_eq!(updated.created_at, user.created_at);
}

#[tokio::test]
async fn should_cascade_delete_to_owned_venues() {
    let store = MemoryStore::new();
    let user = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(input("ana", "12345678910"))
    .await
    .unwrap();
    CreateVenueUseCase {
        repo: store.clone(),
    }
    .execute(user.id, venue_input("Salão Azul"))
    .await
    .unwrap();

    DeleteUserUseCase {
        repo: store.clone(),
    }
    .execute(user.id, user.id)
    .await
    .unwrap();

    let result = GetUserUseCase {
        repo: store.clone(),
    }
    .execute(user.id)
    .await;
    assert!(matches!(result, Err(EventosServiceError::UserNotFound)));

    let venues = ListVenuesUseCase { repo: store }
        .execute(user.id)
        .await
        .unwrap();
    assert!(venues.is_empty());
}

#[tokio::test]
async fn should_not_let_one_account_take_over_another() {
    let store = MemoryStore::new();
    let create = CreateUserUseCase {
        repo: store.clone(),
    };
    let victim = create.execute(input("victim", "12345678910")).await.unwrap();
    let intruder = create.execute(input("intruder", "98765432100")).await.unwrap();

    let result = UpdateUserUseCase {
        repo: store.clone(),
    }
    .execute(
        intruder.id,
        victim.id,
        UpdateUserInput {
            password: Some("taken-over".into()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(EventosServiceError::UserNotFound)));

    let login = CreateTokenUseCase {
        users: store.clone(),
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        ttl_secs: 3600,
    };
    let result = login
        .execute(CreateTokenInput {
            username: "victim".into(),
            password: "taken-over".into(),
        })
        .await;
    assert!(matches!(result, Err(EventosServiceError::InvalidCredentials)));

    let result = DeleteUserUseCase {
        repo: store.clone(),
    }
    .execute(intruder.id, victim.id)
    .await;
    assert!(matches!(result, Err(EventosServiceError::UserNotFound)));

    let still_there = GetUserUseCase { repo: store }
        .execute(victim.id)
        .await
        .unwrap();
    assert_eq!(still_there.password_hash, victim.password_hash);
}
