//! Role Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Role ID type
pub type RoleId = RecordId;

/// Role model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RoleId>,
    /// Name of the role (unique)
    pub name: String,
    /// List of permissions, `:*` suffix acts as a wildcard
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Whether this is a system role (cannot be deleted)
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_system: bool,
    /// Whether the role is active
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Role {
    /// Create a system role (seeded at first boot)
    pub fn system(name: &str, permissions: Vec<String>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            permissions,
            is_system: true,
            is_active: true,
        }
    }
}
