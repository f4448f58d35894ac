//! # flowboard-service
//!
//! Business logic for password-protected access links. Services follow
//! constructor injection: stores, the authorization oracle, and the clock
//! are provided at construction time via `Arc` references.

pub mod context;
pub mod gated;
pub mod link;

pub use context::RequestContext;
pub use gated::{GatedResourceService, SharedBoard, SharedBusinessUnit};
pub use link::{CreateLinkRequest, CreatedLink, LinkService, VerifiedLink};
