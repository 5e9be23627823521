//! Cellar API 模块 (酒窖重复检测)

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cellar", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/duplicates", post(handler::check_duplicates))
        .layer(middleware::from_fn(require_permission("cellar:read")))
}
