//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod admin_posts;
pub mod admins;
pub mod blogs;
pub mod responses;
pub mod seo;
pub mod site;

pub use admin_posts::{
    create_post, delete_post, edit_redirect, get_post, list_posts, publish_post, unpublish_post,
    update_post,
};
pub use admins::{create_admin, me};
pub use blogs::{get_blog, list_blogs};
pub use seo::score_draft;
pub use site::{robots, sitemap};
