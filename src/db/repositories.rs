//! Repositories: users.

use crate::error::{AppError, AppResult};
use crate::models::{Role, UserRecord, UserStatus};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

// ---- User ----

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("user {}: {}", row.id, e)))?;
        let status: UserStatus = row
            .status
            .parse()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("user {}: {}", row.id, e)))?;
        Ok(UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: Some(row.password_hash),
            role: Some(role),
            status,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, role, status, created_at, updated_at";

pub async fn user_create(
    pool: &DbPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> AppResult<UserRow> {
    let sql = format!(
        "INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
    );
    sqlx::query_as::<_, UserRow>(&sql)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already registered".to_string())
            }
            _ => AppError::Db(e),
        })
}

pub async fn user_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn user_get_by_id(pool: &DbPool, id: Uuid) -> AppResult<Option<UserRow>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: &str, status: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_to_full_record() {
        let rec = UserRecord::try_from(row("admin", "active")).unwrap();
        assert_eq!(rec.role, Some(Role::Admin));
        assert_eq!(rec.status, UserStatus::Active);
        assert_eq!(rec.password_hash.as_deref(), Some("hash"));
    }

    #[test]
    fn unknown_role_is_internal_error() {
        let err = UserRecord::try_from(row("superuser", "active")).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
