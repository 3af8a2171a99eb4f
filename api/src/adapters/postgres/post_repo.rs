//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{
    NewPost, Post, PostId, PostLocation, PostQuery, PostSort, PostStatus, PostUpdate,
};
use crate::domain::ports::PostRepository;
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &PostId) -> Result<posts::Model, DomainError> {
        posts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Post {}", id)))
    }
}

/// Unique violations on `posts` can only come from the slug
fn map_write_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists("A post with this slug already exists".to_string())
        }
        _ => DomainError::Database(err.to_string()),
    }
}

fn sort_column(sort: PostSort) -> posts::Column {
    match sort {
        PostSort::CreatedAt => posts::Column::CreatedAt,
        PostSort::UpdatedAt => posts::Column::UpdatedAt,
        PostSort::Title => posts::Column::Title,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let result = posts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let result = posts::Entity::find()
            .filter(posts::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, query: &PostQuery) -> Result<(Vec<Post>, u64), DomainError> {
        let mut select = posts::Entity::find();
        if let Some(status) = query.status {
            select = select.filter(posts::Column::Status.eq(status.to_string()));
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let order = if query.ascending {
            Order::Asc
        } else {
            Order::Desc
        };
        let results = select
            .order_by(sort_column(query.sort), order)
            .order_by_asc(posts::Column::Id)
            .offset(query.offset)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok((results.into_iter().map(|m| m.into()).collect(), total))
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let now = Utc::now().fixed_offset();
        let published_at = (post.status == PostStatus::Published).then_some(now);

        let model = posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(post.title.clone()),
            slug: Set(post.slug.clone()),
            content: Set(post.content.clone()),
            image_url: Set(post.image_url.clone()),
            excerpt: Set(post.excerpt.clone()),
            meta_title: Set(post.meta_title.clone()),
            meta_description: Set(post.meta_description.clone()),
            keywords: Set(serde_json::Value::from(post.keywords.clone())),
            focus_keyword: Set(post.focus_keyword.clone()),
            writer: Set(post.writer.clone()),
            linkedin_url: Set(post.linkedin_url.clone()),
            status: Set(post.status.to_string()),
            seo_score: Set(post.seo_score),
            created_at: Set(now),
            updated_at: Set(now),
            published_at: Set(published_at),
        };

        let result = model.insert(&self.db).await.map_err(map_write_err)?;

        Ok(result.into())
    }

    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<Post, DomainError> {
        let mut model = self.find_model(id).await?.into_active_model();

        model.title = Set(update.title.clone());
        model.slug = Set(update.slug.clone());
        model.content = Set(update.content.clone());
        model.seo_score = Set(update.seo_score);
        model.updated_at = Set(Utc::now().fixed_offset());
        if let Some(image_url) = &update.image_url {
            model.image_url = Set(image_url.clone());
        }
        if let Some(excerpt) = &update.excerpt {
            model.excerpt = Set(Some(excerpt.clone()).filter(|s| !s.is_empty()));
        }
        if let Some(meta_title) = &update.meta_title {
            model.meta_title = Set(Some(meta_title.clone()).filter(|s| !s.is_empty()));
        }
        if let Some(meta_description) = &update.meta_description {
            model.meta_description =
                Set(Some(meta_description.clone()).filter(|s| !s.is_empty()));
        }
        if let Some(keywords) = &update.keywords {
            model.keywords = Set(serde_json::Value::from(keywords.clone()));
        }
        if let Some(focus_keyword) = &update.focus_keyword {
            model.focus_keyword = Set(Some(focus_keyword.clone()).filter(|s| !s.is_empty()));
        }
        if let Some(writer) = &update.writer {
            model.writer = Set(writer.clone());
        }
        if let Some(linkedin_url) = &update.linkedin_url {
            model.linkedin_url = Set(Some(linkedin_url.clone()).filter(|s| !s.is_empty()));
        }

        let result = model.update(&self.db).await.map_err(map_write_err)?;

        Ok(result.into())
    }

    async fn set_status(&self, id: &PostId, status: PostStatus) -> Result<Post, DomainError> {
        let existing = self.find_model(id).await?;
        let now = Utc::now().fixed_offset();
        let published_at = match (status, existing.published_at) {
            (PostStatus::Published, None) => Some(now),
            (_, previous) => previous,
        };

        let mut model = existing.into_active_model();
        model.status = Set(status.to_string());
        model.published_at = Set(published_at);
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &PostId) -> Result<Post, DomainError> {
        let existing = self.find_model(id).await?;

        posts::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(existing.into())
    }

    async fn list_published_locations(&self) -> Result<Vec<PostLocation>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::Status.eq(PostStatus::Published.to_string()))
            .order_by_desc(posts::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|m| PostLocation {
                slug: m.slug,
                updated_at: m.updated_at.with_timezone(&Utc),
            })
            .collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: PostId(model.id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            image_url: model.image_url,
            excerpt: model.excerpt,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            keywords: serde_json::from_value(model.keywords).unwrap_or_default(),
            focus_keyword: model.focus_keyword,
            writer: model.writer,
            linkedin_url: model.linkedin_url,
            status: model.status.parse().unwrap_or(PostStatus::Draft),
            seo_score: model.seo_score,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            published_at: model.published_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
