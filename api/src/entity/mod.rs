//! SeaORM entities
//!
//! Table mappings for the schema in `migrations/`. Domain code converts
//! these into the types in `domain::entities`.

pub mod admins;
pub mod posts;
