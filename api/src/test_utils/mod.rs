//! Test utilities
//!
//! In-memory repository implementations and fixtures for service tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
