//! Auth HTTP handlers: login, register, me.

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::auth::LoginOutcome;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::{AuthUser, ValidatedJson};
use crate::models::{NewUser, ResponseDto, SanitizedUser, UserRecord};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<ResponseDto<LoginOutcome>>, AppError> {
    let outcome = state.auth().login(&body.email, &body.password).await?;
    Ok(Json(ResponseDto::ok(outcome)))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<NewUser>,
) -> Result<Json<ResponseDto<UserRecord>>, AppError> {
    let user = state.auth().register(body).await?;
    Ok(Json(ResponseDto::ok(user)))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ResponseDto<SanitizedUser>>, AppError> {
    let user = state.auth().profile(&user).await?;
    Ok(Json(ResponseDto::ok(user)))
}
