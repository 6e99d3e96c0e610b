//! Route definitions for the Tripnest API

mod auth;
mod bookings;
mod catalog;

pub use auth::auth_routes;
pub use bookings::booking_routes;
pub use catalog::catalog_routes;
