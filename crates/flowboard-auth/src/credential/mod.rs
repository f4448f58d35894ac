//! Link secret generation and hashing.
//!
//! A secret is produced once per link, shown to the creator once, and only
//! its hash is persisted.

pub mod generator;
pub mod hasher;

pub use generator::SecretGenerator;
pub use hasher::SecretHasher;
