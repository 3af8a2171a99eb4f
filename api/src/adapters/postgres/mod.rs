//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod admin_repo;
pub mod post_repo;


pub use admin_repo::PostgresAdminRepository;
pub use post_repo::PostgresPostRepository;
