//! Quadra Back-Office Server - 餐厅后台日结与统计服务
//!
//! # 模块结构
//!
//! ```text
//! quadra-server/src/
//! ├── core/          # 配置、状态、服务器启动
//! ├── auth/          # JWT 认证、权限
//! ├── db/            # 嵌入式 SurrealDB 数据库层
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、时间、校验工具
//! ```
//!
//! The reconciliation and statistics math lives in `shared::closure`; this
//! crate only persists closure records and serves the derived reports.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ____                  __
  / __ \__  ______ _____/ /________ _
 / / / / / / / __ `/ __  / ___/ __ `/
/ /_/ / /_/ / /_/ / /_/ / /  / /_/ /
\___\_\__,_/\__,_/\__,_/_/   \__,_/
    "#
    );
}
