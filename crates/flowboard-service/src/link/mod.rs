//! Access link lifecycle: create, list, revoke, verify.

pub mod model;
pub mod service;

pub use model::{CreateLinkRequest, CreatedLink, VerifiedLink};
pub use service::LinkService;
