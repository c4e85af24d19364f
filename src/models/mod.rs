//! Data models for users and response envelopes.

pub mod response;
pub mod user;

pub use response::*;
pub use user::*;
