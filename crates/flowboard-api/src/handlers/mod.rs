//! Route handlers organized by domain.

pub mod board_links;
pub mod health;
pub mod public;
pub mod unit_links;
