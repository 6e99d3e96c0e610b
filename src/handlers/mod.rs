//! API handlers for the Tripnest backend

pub mod auth;
pub mod bookings;
pub mod catalog;

pub use auth::*;
pub use bookings::*;
pub use catalog::*;

// Re-export the auth extractors for handler use
pub use crate::middleware::{AuthenticatedJson, AuthenticatedUser};
