//! Authentication: login, register, password hashing, session tokens.

mod handlers;
mod jwt;
mod password;
mod service;

pub use handlers::{login, me, register, LoginRequest};
pub use jwt::{Claims, JwtSecret};
pub use password::{hash_password, hash_password_blocking, verify_password, verify_password_blocking};
pub use service::{AuthAppService, LoginOutcome};
