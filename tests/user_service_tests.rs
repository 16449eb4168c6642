use finapi::{
    repositories::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_create_user_success() {
    // Create isolated test database
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let request = CreateUserRequest {
        name: "User Create".to_string(),
        email: "usercreate@email.com".to_string(),
        password: "password123".to_string(),
    };

    let user = service.create_user(request).await.unwrap();
    assert_eq!(user.email, "usercreate@email.com");
    assert_eq!(user.name, "User Create");

    // Password is stored hashed, never verbatim
    assert_ne!(user.password_hash, "password123");
    assert!(service.verify_password("password123", &user.password_hash));
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let first = service
        .create_user(CreateUserRequest {
            name: "First".to_string(),
            email: "duplicate@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await;
    assert!(first.is_ok());

    let second = service
        .create_user(CreateUserRequest {
            name: "Second".to_string(),
            email: "duplicate@example.com".to_string(),
            password: "password456".to_string(),
        })
        .await;
    assert!(matches!(second, Err(UserServiceError::EmailTaken)));
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    service
        .create_user(CreateUserRequest {
            name: "Lower".to_string(),
            email: "case@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    // Differing case counts as a different address
    let result = service
        .create_user(CreateUserRequest {
            name: "Upper".to_string(),
            email: "Case@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_profile_round_trip() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let created = service
        .create_user(CreateUserRequest {
            name: "User Profile".to_string(),
            email: "userprofile@email.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    let fetched = service.profile(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, "userprofile@email.com");
}

#[tokio::test]
async fn test_profile_unknown_user() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let result = service.profile(Uuid::new_v4()).await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound)));
}

#[tokio::test]
async fn test_list_users() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    for i in 0..5 {
        service
            .create_user(CreateUserRequest {
                name: format!("User {}", i),
                email: format!("user{}@example.com", i),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
    }

    let users = service.list_users(100, 0).await.unwrap();
    assert_eq!(users.len(), 5);

    let limited = service.list_users(3, 0).await.unwrap();
    assert_eq!(limited.len(), 3);

    let offset = service.list_users(100, 2).await.unwrap();
    assert_eq!(offset.len(), 3);
}
