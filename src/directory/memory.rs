//! In-process directory backed by a map. Used by tests and local runs without Postgres.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{apply_projections, Projection, UserDirectory, UserFilter};
use crate::auth::hash_password_blocking;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Role, UserRecord, UserStatus};

#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed record, bypassing hashing. Fixture helper.
    pub async fn insert(&self, record: UserRecord) {
        self.users.write().await.insert(record.id, record);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get(
        &self,
        filter: UserFilter,
        projections: &[Projection],
    ) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        let found = match &filter {
            UserFilter::Id(id) => users.get(id),
            UserFilter::Email(email) => users.values().find(|u| &u.email == email),
        };
        Ok(found.cloned().map(|r| apply_projections(r, projections)))
    }

    async fn create(&self, payload: NewUser, projections: &[Projection]) -> AppResult<UserRecord> {
        let password_hash = hash_password_blocking(payload.password).await?;

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == payload.email) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            password_hash: Some(password_hash),
            role: Some(Role::User),
            status: UserStatus::Active,
            created_at: Some(now),
            updated_at: Some(now),
        };
        users.insert(record.id, record.clone());
        debug!(user_id = %record.id, "user created");
        Ok(apply_projections(record, projections))
    }
}
