//! Auth application service: login and register over a user directory.

use std::sync::Arc;

use tracing::{debug, info};

use crate::auth::{verify_password_blocking, JwtSecret};
use crate::directory::{Projection, UserDirectory, UserFilter};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, SanitizedUser, UserRecord};

const LOGIN_PROJECTIONS: &[Projection] = &[Projection::WithoutTimestamp, Projection::WithRole];
const REGISTER_PROJECTIONS: &[Projection] = &[
    Projection::WithoutPassword,
    Projection::WithRole,
    Projection::WithoutTimestamp,
];

/// Successful login: the sanitized profile and the token signed over it.
#[derive(Debug, serde::Serialize)]
pub struct LoginOutcome {
    pub user: SanitizedUser,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthAppService {
    directory: Arc<dyn UserDirectory>,
    jwt: JwtSecret,
}

impl AuthAppService {
    pub fn new(directory: Arc<dyn UserDirectory>, jwt: JwtSecret) -> Self {
        Self { directory, jwt }
    }

    pub fn jwt(&self) -> &JwtSecret {
        &self.jwt
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .directory
            .get(UserFilter::Email(email.to_string()), LOGIN_PROJECTIONS)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))?;

        let hash = user
            .password_hash
            .clone()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("user {} has no password hash", user.id)))?;

        if !verify_password_blocking(password.to_string(), hash).await? {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AppError::BadRequest("Password incorrect!".to_string()));
        }

        let user = SanitizedUser::from(user);
        let token = self.jwt.issue(&user)?;
        info!(user_id = %user.id, "login succeeded");
        Ok(LoginOutcome { user, token })
    }

    pub async fn register(&self, payload: NewUser) -> AppResult<UserRecord> {
        self.directory.create(payload, REGISTER_PROJECTIONS).await
    }

    /// Current profile of the user a session token was issued to.
    pub async fn profile(&self, user: &SanitizedUser) -> AppResult<SanitizedUser> {
        self.directory
            .get(UserFilter::Id(user.id), REGISTER_PROJECTIONS)
            .await?
            .map(SanitizedUser::from)
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryUserDirectory;
    use chrono::Duration;
    use tokio_test::{assert_err, assert_ok};

    async fn service_with_user() -> (AuthAppService, UserRecord) {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let service = AuthAppService::new(
            directory,
            JwtSecret::new("test-secret".to_string(), Duration::hours(1)),
        );
        let created = service
            .register(NewUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        (service, created)
    }

    #[tokio::test]
    async fn login_issues_token_for_sanitized_user() {
        let (service, created) = service_with_user().await;
        let outcome = assert_ok!(service.login("ada@example.com", "password123").await);
        assert_eq!(outcome.user.id, created.id);
        assert!(outcome.user.created_at.is_none());

        let claims = service.jwt().validate(&outcome.token).unwrap();
        assert_eq!(claims.user, outcome.user);
    }

    #[tokio::test]
    async fn login_unknown_email_is_not_found() {
        let (service, _) = service_with_user().await;
        let err = assert_err!(service.login("nobody@example.com", "password123").await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn login_wrong_password_is_bad_request() {
        let (service, _) = service_with_user().await;
        let err = assert_err!(service.login("ada@example.com", "wrong-password").await);
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn register_returns_record_without_hash() {
        let (_, created) = service_with_user().await;
        assert!(created.password_hash.is_none());
        assert!(created.role.is_some());
        assert!(created.created_at.is_none());
    }

    #[tokio::test]
    async fn profile_of_deleted_user_is_not_found() {
        let (service, _) = service_with_user().await;
        let ghost = SanitizedUser {
            id: uuid::Uuid::new_v4(),
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            role: None,
            created_at: None,
            updated_at: None,
        };
        assert!(matches!(
            service.profile(&ghost).await,
            Err(AppError::NotFound(_))
        ));
    }
}
