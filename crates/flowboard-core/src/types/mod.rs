//! Core type definitions used across the Flowboard workspace.

pub mod id;

pub use id::*;
