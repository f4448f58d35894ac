//! Redemption of verified links into the resources they gate.

pub mod model;
pub mod service;

pub use model::{BoardPayload, SharedBoard, SharedBusinessUnit, UnitLinkVerification};
pub use service::GatedResourceService;
