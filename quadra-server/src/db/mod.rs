//! Database Module
//!
//! 嵌入式 SurrealDB (RocksDB 后端)：表结构定义与种子数据。

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::db::models::{Employee, Role};
use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database and define the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("quadra")
            .use_db("backoffice")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database ready at {}", db_path);
        Ok(Self { db })
    }

    /// 定义表和唯一索引
    ///
    /// `daily_closure` 以日期为唯一键：同一天重复提交覆盖旧值。
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            r#"
            DEFINE TABLE IF NOT EXISTS daily_closure SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS uniq_closure_date ON TABLE daily_closure FIELDS date UNIQUE;

            DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS uniq_employee_username ON TABLE employee FIELDS username UNIQUE;

            DEFINE TABLE IF NOT EXISTS role SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS uniq_role_name ON TABLE role FIELDS name UNIQUE;
        "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        Ok(())
    }

    /// 种子数据：默认角色 + 首次启动的管理员账户
    ///
    /// 管理员初始密码随机生成，只在日志中打印一次。
    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        let role_repo = repository::RoleRepository::new(self.db.clone());
        let employee_repo = repository::EmployeeRepository::new(self.db.clone());

        let admin_role = match role_repo
            .find_by_name("admin")
            .await
            .map_err(AppError::from)?
        {
            Some(role) => role,
            None => role_repo
                .create(Role::system("admin", vec!["all".to_string()]))
                .await
                .map_err(AppError::from)?,
        };

        if role_repo
            .find_by_name("manager")
            .await
            .map_err(AppError::from)?
            .is_none()
        {
            role_repo
                .create(Role::system(
                    "manager",
                    vec![
                        "closures:*".to_string(),
                        "statistics:*".to_string(),
                        "cellar:*".to_string(),
                    ],
                ))
                .await
                .map_err(AppError::from)?;
        }

        if employee_repo.count().await.map_err(AppError::from)? == 0 {
            let password = generate_initial_password();
            let admin_role_id = admin_role
                .id
                .clone()
                .ok_or_else(|| AppError::internal("Seeded admin role has no id"))?;

            let hash_pass = Employee::hash_password(&password)
                .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

            employee_repo
                .create(Employee {
                    id: None,
                    username: "admin".to_string(),
                    display_name: "Administrator".to_string(),
                    hash_pass,
                    role: admin_role_id,
                    is_system: true,
                    is_active: true,
                    created_at: shared::util::now_millis(),
                })
                .await
                .map_err(AppError::from)?;

            tracing::warn!(
                username = "admin",
                password = %password,
                "Created initial admin account - change this password immediately"
            );
        }

        Ok(())
    }
}

/// 生成管理员初始密码 (16 位字母数字)
fn generate_initial_password() -> String {
    use rand::Rng;
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
