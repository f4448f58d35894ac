//! # flowboard-entity
//!
//! Domain entity models for Flowboard. Structs here are either database
//! rows (deriving `sqlx::FromRow`) or typed records decoded at the store
//! boundary. Access links and the resources they gate live side by side.

pub mod board;
pub mod business_unit;
pub mod link;
pub mod payload;
