//! Business unit hierarchy entities.

pub mod model;

pub use model::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};
