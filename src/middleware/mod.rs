//! Request extractors: bearer-token auth and validated JSON bodies.

pub mod auth;
pub mod validate;

pub use auth::AuthUser;
pub use validate::ValidatedJson;
