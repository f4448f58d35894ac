//! PostgreSQL repository implementations.

pub mod board;
pub mod business_unit;
pub mod link;
pub mod permission;
pub mod resource;

pub use board::BoardRepository;
pub use business_unit::BusinessUnitRepository;
pub use link::LinkRepository;
pub use permission::PermissionRepository;
pub use resource::PgResourceStore;
