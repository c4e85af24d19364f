//! User directory: owns user persistence and lookup.
//!
//! Handlers never touch storage directly. They go through [`UserDirectory`],
//! asking for the projection of the record they need.

mod memory;
mod postgres;

pub use memory::InMemoryUserDirectory;
pub use postgres::PgUserDirectory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{NewUser, UserRecord};

/// Lookup key for a single user. Email matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    Email(String),
    Id(Uuid),
}

/// Shapes applied to a record before the directory hands it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    WithoutTimestamp,
    WithRole,
    WithoutPassword,
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get(&self, filter: UserFilter, projections: &[Projection])
        -> AppResult<Option<UserRecord>>;

    /// Create a user, hashing `payload.password` before it is stored.
    /// A taken email is [`AppError::Conflict`](crate::error::AppError::Conflict).
    async fn create(&self, payload: NewUser, projections: &[Projection]) -> AppResult<UserRecord>;
}

pub(crate) fn apply_projections(mut record: UserRecord, projections: &[Projection]) -> UserRecord {
    if !projections.contains(&Projection::WithRole) {
        record.role = None;
    }
    if projections.contains(&Projection::WithoutTimestamp) {
        record.created_at = None;
        record.updated_at = None;
    }
    if projections.contains(&Projection::WithoutPassword) {
        record.password_hash = None;
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserStatus};
    use chrono::Utc;

    fn full_record() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: Some("hash".to_string()),
            role: Some(Role::User),
            status: UserStatus::Active,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    #[test]
    fn no_projections_drops_only_role() {
        let rec = apply_projections(full_record(), &[]);
        assert!(rec.role.is_none());
        assert!(rec.password_hash.is_some());
        assert!(rec.created_at.is_some());
    }

    #[test]
    fn register_projection_set() {
        let rec = apply_projections(
            full_record(),
            &[
                Projection::WithoutPassword,
                Projection::WithRole,
                Projection::WithoutTimestamp,
            ],
        );
        assert_eq!(rec.role, Some(Role::User));
        assert!(rec.password_hash.is_none());
        assert!(rec.created_at.is_none() && rec.updated_at.is_none());
    }
}
