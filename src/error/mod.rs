//! Application error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::Jwt(msg) => msg.clone(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                "Internal Server Error".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal failure");
                "Internal Server Error".to_string()
            }
        };

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "message": message,
            "error": status.canonical_reason().unwrap_or("Error"),
        }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_carries_message_and_reason() {
        let (status, json) = body_of(AppError::NotFound("User not found!".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["message"], "User not found!");
        assert_eq!(json["error"], "Not Found");
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_details() {
        let (status, json) =
            body_of(AppError::Internal(anyhow::anyhow!("hash column missing"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Internal Server Error");
    }
}
