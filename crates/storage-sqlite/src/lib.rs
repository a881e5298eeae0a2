//! SQLite storage implementation for Leadfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `leadfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema plus the seeded bootstrap account)
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//! - The single-writer actor and the process-lifetime read cache
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!            core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! Every mutation funnels through the write actor, which clears the read
//! cache wholesale after each successful write. Reads are keyed by
//! (operation, parameters) and served from the cache until then.

pub mod cache;
pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod campaigns;
pub mod clients;
pub mod interactions;
pub mod meetings;
pub mod targets;
pub mod tasks;
pub mod tracker;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, reset_database, run_migrations, DbConnection,
    DbPool, WriteHandle,
};

// Re-export the read cache
pub use cache::ReadCache;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from leadfolio-core for convenience
pub use leadfolio_core::errors::{DatabaseError, Error, Result};
