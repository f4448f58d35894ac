//! Convenience result type alias for Flowboard.

use crate::error::AppError;

/// A specialized `Result` type for Flowboard operations.
pub type AppResult<T> = Result<T, AppError>;
