//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Admin, AdminId, NewAdmin, NewPost, Post, PostId, PostLocation, PostQuery, PostSort,
    PostStatus, PostUpdate,
};
use crate::domain::ports::{AdminRepository, PostRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().insert(post.id, post);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().unwrap().is_empty()
    }

    fn slug_taken(posts: &HashMap<PostId, Post>, slug: &str, except: Option<&PostId>) -> bool {
        posts
            .values()
            .any(|p| p.slug == slug && Some(&p.id) != except)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().unwrap().get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts.values().find(|p| p.slug == slug).cloned())
    }

    async fn list(&self, query: &PostQuery) -> Result<(Vec<Post>, u64), DomainError> {
        let posts = self.posts.read().unwrap();
        let mut matching: Vec<Post> = posts
            .values()
            .filter(|p| query.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();

        matching.sort_by(|a, b| match query.sort {
            PostSort::CreatedAt => a.created_at.cmp(&b.created_at),
            PostSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            PostSort::Title => a.title.cmp(&b.title),
        });
        if !query.ascending {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn create(&self, new_post: &NewPost) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().unwrap();
        if Self::slug_taken(&posts, &new_post.slug, None) {
            return Err(DomainError::AlreadyExists(
                "A post with this slug already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let post = Post {
            id: PostId(uuid::Uuid::new_v4()),
            title: new_post.title.clone(),
            slug: new_post.slug.clone(),
            content: new_post.content.clone(),
            image_url: new_post.image_url.clone(),
            excerpt: new_post.excerpt.clone(),
            meta_title: new_post.meta_title.clone(),
            meta_description: new_post.meta_description.clone(),
            keywords: new_post.keywords.clone(),
            focus_keyword: new_post.focus_keyword.clone(),
            writer: new_post.writer.clone(),
            linkedin_url: new_post.linkedin_url.clone(),
            status: new_post.status,
            seo_score: new_post.seo_score,
            created_at: now,
            updated_at: now,
            published_at: (new_post.status == PostStatus::Published).then_some(now),
        };
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().unwrap();
        if Self::slug_taken(&posts, &update.slug, Some(id)) {
            return Err(DomainError::AlreadyExists(
                "A post with this slug already exists".to_string(),
            ));
        }

        let post = posts
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Post {}", id)))?;
        post.apply(update);
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn set_status(&self, id: &PostId, status: PostStatus) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().unwrap();
        let post = posts
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Post {}", id)))?;

        let now = Utc::now();
        post.status = status;
        post.updated_at = now;
        if status == PostStatus::Published && post.published_at.is_none() {
            post.published_at = Some(now);
        }
        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<Post, DomainError> {
        self.posts
            .write()
            .unwrap()
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Post {}", id)))
    }

    async fn list_published_locations(&self) -> Result<Vec<PostLocation>, DomainError> {
        let posts = self.posts.read().unwrap();
        let mut locations: Vec<PostLocation> = posts
            .values()
            .filter(|p| p.is_published())
            .map(|p| PostLocation {
                slug: p.slug.clone(),
                updated_at: p.updated_at,
            })
            .collect();
        locations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(locations)
    }
}

// ============================================================================
// In-Memory Admin Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryAdminRepository {
    admins: Arc<RwLock<HashMap<AdminId, Admin>>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an admin for testing
    pub fn with_admin(self, admin: Admin) -> Self {
        self.admins.write().unwrap().insert(admin.id, admin);
        self
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, DomainError> {
        Ok(self.admins.read().unwrap().get(id).cloned())
    }

    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError> {
        let admins = self.admins.read().unwrap();
        Ok(admins.values().find(|a| a.api_key_hash == hash).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, DomainError> {
        let admins = self.admins.read().unwrap();
        Ok(admins.values().find(|a| a.username == username).cloned())
    }

    async fn create(&self, new_admin: &NewAdmin) -> Result<Admin, DomainError> {
        let admin = Admin {
            id: AdminId(uuid::Uuid::new_v4()),
            username: new_admin.username.clone(),
            api_key_hash: new_admin.api_key_hash.clone(),
            created_at: Utc::now(),
            last_seen_at: None,
        };
        self.admins.write().unwrap().insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn update_api_key_hash(&self, id: &AdminId, hash: &str) -> Result<(), DomainError> {
        let mut admins = self.admins.write().unwrap();
        let admin = admins
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Admin {}", id)))?;
        admin.api_key_hash = hash.to_string();
        Ok(())
    }

    async fn update_last_seen(&self, id: &AdminId) -> Result<(), DomainError> {
        let mut admins = self.admins.write().unwrap();
        if let Some(admin) = admins.get_mut(id) {
            admin.last_seen_at = Some(Utc::now());
        }
        Ok(())
    }
}
