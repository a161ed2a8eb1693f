//! # MedBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `medblog-core`:
//! SeaORM repositories for the hosted Postgres tables, an in-memory store
//! and access-token verification.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT session verification

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use memory::InMemoryStore;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{
    PostgresCommentRepository, PostgresFaqRepository, PostgresPostRepository,
    PostgresProfileRepository, PostgresUserQueryRepository, connect,
};
