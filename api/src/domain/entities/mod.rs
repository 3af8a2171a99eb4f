//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod admin;
pub mod post;

pub use admin::{Admin, AdminId, NewAdmin};
pub use post::{NewPost, Post, PostId, PostLocation, PostQuery, PostSort, PostStatus, PostUpdate};
