//! Auth extractor: session token from the `Authorization: Bearer` header.

use axum::extract::FromRequestParts;
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::debug;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::SanitizedUser;

/// Extractor: the sanitized profile carried by a valid session token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub SanitizedUser);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized("Missing or invalid Authorization header".to_string())
                })?;
        let claims = state.auth().jwt().validate(bearer.token()).map_err(|e| {
            debug!(error = %e, "rejected session token");
            e
        })?;
        Ok(AuthUser(claims.user))
    }
}
