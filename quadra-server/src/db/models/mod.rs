//! Database-side models
//!
//! Wire-level domain models live in `shared::models`; these are the
//! SurrealDB-backed records that never leave the server.

pub mod employee;
pub mod role;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeId};
pub use role::{Role, RoleId};
