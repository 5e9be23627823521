//! Employee Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Employee;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find employee by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;

        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Number of employees
    pub async fn count(&self) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE count() FROM employee GROUP ALL")
            .await?;

        let counts: Vec<usize> = result.take(0)?;
        Ok(counts.into_iter().next().unwrap_or(0))
    }

    /// Create a new employee
    ///
    /// `hash_pass` is `skip_serializing` on the model (it must never reach an
    /// API response), so the insert binds every field explicitly.
    pub async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        if self.find_by_username(&employee.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee '{}' already exists",
                employee.username
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"
                CREATE employee SET
                    username = $username,
                    display_name = $display_name,
                    hash_pass = $hash_pass,
                    role = $role,
                    is_system = $is_system,
                    is_active = $is_active,
                    created_at = $created_at
                RETURN AFTER
            "#,
            )
            .bind(("username", employee.username))
            .bind(("display_name", employee.display_name))
            .bind(("hash_pass", employee.hash_pass))
            .bind(("role", employee.role))
            .bind(("is_system", employee.is_system))
            .bind(("is_active", employee.is_active))
            .bind(("created_at", employee.created_at))
            .await?;

        let created: Vec<Employee> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }
}
