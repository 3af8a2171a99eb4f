//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the scorer.

pub mod admin_service;
pub mod pagination;
pub mod post_service;

pub use admin_service::{hash_api_key, AdminService};
pub use pagination::{Page, PageRequest};
pub use post_service::{CreatePost, EditPost, ListOptions, PostService};
