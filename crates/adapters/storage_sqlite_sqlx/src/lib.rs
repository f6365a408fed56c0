//! # restricted-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port defined in `restricted-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations under `migrations/`)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `restricted-app` (for port traits) and `restricted-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod restricted_entity_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use restricted_entity_repo::SqliteRestrictedEntityRepository;
