//! Daily Closure API 模块 (日结记录)

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::{require_admin, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/closures", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list_month))
        .route("/{date}", get(handler::get_by_date))
        .layer(middleware::from_fn(require_permission("closures:read")));

    let write_routes = Router::new()
        .route("/{date}", put(handler::upsert))
        .layer(middleware::from_fn(require_permission("closures:write")));

    // 删除是管理操作
    let delete_routes = Router::new()
        .route("/{date}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(write_routes).merge(delete_routes)
}
