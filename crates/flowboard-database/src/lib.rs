//! # flowboard-database
//!
//! PostgreSQL connection management, the store traits consumed by the
//! service layer, their sqlx repository implementations, and in-memory
//! equivalents for tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{LinkStore, ResourceStore};
