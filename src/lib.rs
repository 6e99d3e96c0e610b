//! Tripnest Backend Library
//!
//! This library exports the core modules for the Tripnest travel-booking
//! server: authentication, the booking lifecycle, the static catalogs, and
//! the HTTP surface wired on top of them.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
