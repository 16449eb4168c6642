use crate::auth::jwt::JwtKeys;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("Token error: {0}")]
    TokenError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public slice of the authenticated user returned alongside the token.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    jwt_keys: Arc<JwtKeys>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>, jwt_keys: Arc<JwtKeys>) -> Self {
        Self {
            user_repository,
            jwt_keys,
        }
    }

    /// Unknown email and wrong password collapse into the same error so the
    /// response cannot be used to enumerate registered accounts.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<Session, AuthServiceError> {
        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !self.verify_password(&request.password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "authentication failed");
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self
            .jwt_keys
            .sign(user.id)
            .map_err(|e| AuthServiceError::TokenError(e.to_string()))?;

        Ok(Session {
            token,
            user: SessionUser {
                id: user.id,
                name: user.name,
            },
        })
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::Duration;
    use mockall::predicate::*;

    fn keys() -> Arc<JwtKeys> {
        Arc::new(JwtKeys::new("test-secret", Duration::hours(1)))
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .with(eq("nobody@example.com"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));

        let service = AuthService::new(Arc::new(mock_repo), keys());

        let request = LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "password123".to_string(),
        };

        let result = service.authenticate(request).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_same_error() {
        use crate::models::User;
        use chrono::Utc;

        // A real argon2 hash of a password other than the one submitted
        let hash = {
            use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(b"correct-password", &salt)
                .unwrap()
                .to_string()
        };

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .with(eq("user@example.com"))
            .times(1)
            .returning(move |_| {
                let hash = hash.clone();
                Box::pin(async move {
                    Ok(Some(User {
                        id: Uuid::new_v4(),
                        name: "User".to_string(),
                        email: "user@example.com".to_string(),
                        password_hash: hash,
                        created_at: Utc::now(),
                        updated_at: Utc::now(),
                    }))
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), keys());

        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "wrong-password".to_string(),
        };

        // Identical variant as the unknown-email case
        let result = service.authenticate(request).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }
}
