//! Shared types for the Quadra back-office
//!
//! Common types used by the server and any client frontends: the unified
//! error system, domain models, and the pure closure reconciliation engine.
//! Everything in [`closure`] is side-effect free so the server response and a
//! live form preview can run the exact same math.

pub mod client;
pub mod closure;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
