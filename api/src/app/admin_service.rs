//! Admin service
//!
//! Handles admin creation, API key authentication, and the bootstrap admin
//! configured through the environment.

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{Admin, AdminId, NewAdmin};
use crate::domain::ports::AdminRepository;
use crate::error::{AppError, DomainError};

/// Service for managing admins
pub struct AdminService<AR>
where
    AR: AdminRepository,
{
    admins: Arc<AR>,
}

impl<AR> AdminService<AR>
where
    AR: AdminRepository,
{
    pub fn new(admins: Arc<AR>) -> Self {
        Self { admins }
    }

    /// Create a new admin
    ///
    /// Returns (admin, api_key) - the key is only shown once
    pub async fn create_admin(&self, username: &str) -> Result<(Admin, String), AppError> {
        validate_username(username)?;

        if self.admins.find_by_username(username).await?.is_some() {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Admin with username '{}' already exists",
                username
            ))));
        }

        let api_key = generate_api_key();
        let admin = self
            .admins
            .create(&NewAdmin {
                username: username.to_string(),
                api_key_hash: hash_api_key(&api_key),
            })
            .await?;

        tracing::info!(admin_id = %admin.id, username = %admin.username, "Admin created");

        Ok((admin, api_key))
    }

    /// Make sure an admin with this username exists and accepts `api_key`
    pub async fn ensure_admin(&self, username: &str, api_key: &str) -> Result<Admin, AppError> {
        validate_username(username)?;
        let api_key_hash = hash_api_key(api_key);

        match self.admins.find_by_username(username).await? {
            Some(mut admin) if admin.api_key_hash != api_key_hash => {
                self.admins
                    .update_api_key_hash(&admin.id, &api_key_hash)
                    .await?;
                tracing::info!(username = %username, "Bootstrap admin key rotated");
                admin.api_key_hash = api_key_hash;
                Ok(admin)
            }
            Some(admin) => Ok(admin),
            None => {
                let admin = self
                    .admins
                    .create(&NewAdmin {
                        username: username.to_string(),
                        api_key_hash,
                    })
                    .await?;
                tracing::info!(username = %username, "Bootstrap admin created");
                Ok(admin)
            }
        }
    }

    /// Find an admin by their API key hash
    pub async fn find_by_api_key(&self, api_key_hash: &str) -> Result<Option<Admin>, AppError> {
        Ok(self.admins.find_by_api_key_hash(api_key_hash).await?)
    }

    /// Get an admin by ID
    pub async fn get(&self, id: &AdminId) -> Result<Admin, AppError> {
        self.admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin {} not found", id)))
    }

    /// Update admin's last seen timestamp
    pub async fn touch(&self, id: &AdminId) -> Result<(), AppError> {
        self.admins.update_last_seen(id).await?;
        Ok(())
    }
}

fn validate_username(username: &str) -> Result<(), AppError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if username.is_empty() || username.len() > 64 || !valid_chars {
        return Err(AppError::BadRequest(
            "Username must be 1-64 characters of letters, digits, '-' or '_'".to_string(),
        ));
    }
    Ok(())
}

/// Generate a random API key
fn generate_api_key() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!("mw-{}", hex::encode(bytes))
}

/// Hash an API key for storage
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}
