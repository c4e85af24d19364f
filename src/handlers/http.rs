//! Shared HTTP state and the health probe.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::AuthAppService;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthAppService,
}

impl AppState {
    pub fn new(auth: AuthAppService) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &AuthAppService {
        &self.auth
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "authgate" })),
    )
}
