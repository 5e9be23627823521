//! Error re-exports
//!
//! The unified error system lives in `shared::error` so clients can share
//! the same codes; handlers import it through here.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
