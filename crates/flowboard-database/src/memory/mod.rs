//! In-memory store implementations.
//!
//! Used by the test suites and by the server when `database.url` is
//! `memory`. Nothing here survives a restart.

pub mod link;
pub mod resource;

pub use link::MemoryLinkStore;
pub use resource::MemoryResourceStore;
