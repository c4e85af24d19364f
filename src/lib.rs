//! Credential authentication service built with Rust.
//!
//! Login verifies a password against the stored argon2 hash and issues a
//! signed session token; register forwards new users to the user directory.

pub mod auth;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::trace::TraceLayer;

/// Build the API router (auth, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/auth", auth_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
