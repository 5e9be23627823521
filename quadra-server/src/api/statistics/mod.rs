//! Statistics API 模块 (统计报表)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/statistics", routes())
}

fn routes() -> Router<ServerState> {
    // 报表查看：需要 statistics:read 权限
    Router::new()
        .route("/monthly", get(handler::get_monthly))
        .route("/annual", get(handler::get_annual))
        .route("/comparison", get(handler::get_comparison))
        .route("/top-days", get(handler::get_top_days))
        .layer(middleware::from_fn(require_permission("statistics:read")))
}
