//! PostgreSQL adapter for AdminRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::entities::{Admin, AdminId, NewAdmin};
use crate::domain::ports::AdminRepository;
use crate::entity::admins;
use crate::error::DomainError;

/// PostgreSQL implementation of AdminRepository
pub struct PostgresAdminRepository {
    db: DatabaseConnection,
}

impl PostgresAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, DomainError> {
        let result = admins::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError> {
        let result = admins::Entity::find()
            .filter(admins::Column::ApiKeyHash.eq(hash))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, DomainError> {
        let result = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, admin: &NewAdmin) -> Result<Admin, DomainError> {
        let model = admins::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(admin.username.clone()),
            api_key_hash: Set(admin.api_key_hash.clone()),
            created_at: Set(Utc::now().fixed_offset()),
            last_seen_at: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_api_key_hash(&self, id: &AdminId, hash: &str) -> Result<(), DomainError> {
        admins::ActiveModel {
            id: Set(id.0),
            api_key_hash: Set(hash.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update_last_seen(&self, id: &AdminId) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        admins::ActiveModel {
            id: Set(id.0),
            last_seen_at: Set(Some(now)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<admins::Model> for Admin {
    fn from(model: admins::Model) -> Self {
        Admin {
            id: AdminId(model.id),
            username: model.username,
            api_key_hash: model.api_key_hash,
            created_at: model.created_at.with_timezone(&Utc),
            last_seen_at: model.last_seen_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
