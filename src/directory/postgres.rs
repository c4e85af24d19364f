//! PostgreSQL-backed directory.

use async_trait::async_trait;
use tracing::info;

use super::{apply_projections, Projection, UserDirectory, UserFilter};
use crate::auth::hash_password_blocking;
use crate::db::{user_create, user_find_by_email, user_get_by_id, DbPool};
use crate::error::AppResult;
use crate::models::{NewUser, Role, UserRecord};

#[derive(Clone, Debug)]
pub struct PgUserDirectory {
    pool: DbPool,
}

impl PgUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn get(
        &self,
        filter: UserFilter,
        projections: &[Projection],
    ) -> AppResult<Option<UserRecord>> {
        let row = match &filter {
            UserFilter::Email(email) => user_find_by_email(&self.pool, email).await?,
            UserFilter::Id(id) => user_get_by_id(&self.pool, *id).await?,
        };
        row.map(UserRecord::try_from)
            .transpose()
            .map(|r| r.map(|r| apply_projections(r, projections)))
    }

    async fn create(&self, payload: NewUser, projections: &[Projection]) -> AppResult<UserRecord> {
        let NewUser {
            name,
            email,
            password,
        } = payload;
        let password_hash = hash_password_blocking(password).await?;
        let row = user_create(&self.pool, &name, &email, &password_hash, Role::User).await?;
        info!(user_id = %row.id, "user created");
        Ok(apply_projections(UserRecord::try_from(row)?, projections))
    }
}
