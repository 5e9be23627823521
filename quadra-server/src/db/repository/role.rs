//! Role Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Role;

const TABLE: &str = "role";

#[derive(Clone)]
pub struct RoleRepository {
    base: BaseRepository,
}

impl RoleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find role by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM role WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;

        let roles: Vec<Role> = result.take(0)?;
        Ok(roles.into_iter().next())
    }

    /// Find role by id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Role>> {
        let role: Option<Role> = self.base.db().select(id.clone()).await?;
        Ok(role)
    }

    /// Create a new role
    pub async fn create(&self, role: Role) -> RepoResult<Role> {
        if self.find_by_name(&role.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Role '{}' already exists",
                role.name
            )));
        }

        let created: Option<Role> = self.base.db().create(TABLE).content(role).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create role".to_string()))
    }
}
