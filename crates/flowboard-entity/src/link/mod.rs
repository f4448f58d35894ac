//! Access link domain entities.

pub mod model;
pub mod resource;
pub mod role;

pub use model::{AccessLink, LinkSummary, NewAccessLink};
pub use resource::{LinkScope, ResourceRef};
pub use role::LinkRole;
