//! Authentication
//!
//! Bearer API key middleware for the admin routes.

pub mod api_key;

pub use api_key::auth_middleware;
