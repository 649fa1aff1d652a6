//! Convenience result type alias for Linkdrop.

use crate::error::AppError;

/// A specialized `Result` type for Linkdrop operations.
pub type AppResult<T> = Result<T, AppError>;
