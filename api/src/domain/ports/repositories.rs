//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Admin, AdminId, NewAdmin, NewPost, Post, PostId, PostLocation, PostQuery, PostStatus,
    PostUpdate,
};
use crate::error::DomainError;

/// Repository for Post entities
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Find a post by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError>;

    /// List one page of posts, with the total number of matching posts
    async fn list(&self, query: &PostQuery) -> Result<(Vec<Post>, u64), DomainError>;

    /// Create a new post; fails with `AlreadyExists` when the slug is taken
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;

    /// Apply an update and return the stored post
    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<Post, DomainError>;

    /// Change publication state. `published_at` is set on the first publish only.
    async fn set_status(&self, id: &PostId, status: PostStatus) -> Result<Post, DomainError>;

    /// Delete a post and return what was deleted
    async fn delete(&self, id: &PostId) -> Result<Post, DomainError>;

    /// Slugs and modification times of every published post
    async fn list_published_locations(&self) -> Result<Vec<PostLocation>, DomainError>;
}

/// Repository for Admin entities
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find an admin by ID
    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, DomainError>;

    /// Find an admin by API key hash
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError>;

    /// Find an admin by username
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, DomainError>;

    /// Create a new admin
    async fn create(&self, admin: &NewAdmin) -> Result<Admin, DomainError>;

    /// Replace the stored API key hash
    async fn update_api_key_hash(&self, id: &AdminId, hash: &str) -> Result<(), DomainError>;

    /// Update the last seen timestamp
    async fn update_last_seen(&self, id: &AdminId) -> Result<(), DomainError>;
}
