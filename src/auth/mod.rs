//! Authentication: JWT sessions over email/password credentials

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{generate_token, user_id_from_claims, verify_token, Claims, JwtError};
pub use password::{hash_password, verify_password};
pub use service::{AuthError, AuthService, Session};
