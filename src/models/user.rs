//! User records as owned by the directory, and the views exposed to clients.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Authorization role attached to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Account status. Never exposed outside the directory's own records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(ParseEnumError {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for UserStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(ParseEnumError {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// A user as returned by the directory after projections were applied.
///
/// Fields a projection can remove are optional. The password hash is never
/// serialized, whatever projections were requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user record with the password hash and status removed.
/// This is what login responses and session tokens carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserRecord> for SanitizedUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Register payload, forwarded verbatim to the directory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: Some("$argon2id$v=19$...".to_string()),
            role: Some(Role::Admin),
            status: UserStatus::Inactive,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn record_never_serializes_password_hash() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn sanitized_drops_status_and_hash() {
        let json = serde_json::to_value(SanitizedUser::from(record())).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("status"));
        assert!(!obj.contains_key("passwordHash"));
        assert_eq!(obj["email"], "ada@example.com");
    }

    #[test]
    fn role_and_status_parse_round_trip_names() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::User.as_str().parse::<Role>().unwrap(), Role::User);
        assert_eq!("inactive".parse::<UserStatus>().unwrap(), UserStatus::Inactive);
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn new_user_validation() {
        let ok = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = NewUser {
            password: "short".to_string(),
            ..ok.clone()
        };
        assert!(short.validate().is_err());

        let bad_email = NewUser {
            email: "not-an-email".to_string(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }
}
