//! Daily Closure API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::ErrorCode;
use shared::models::{ClosureUpsert, DailyClosureView};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::ClosureRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, time};

/// Query params for the month listing
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

/// PUT /api/closures/:date - 幂等写入一天的日结记录
///
/// 以日期为键：同一天重复提交覆盖旧值。响应回显解析后的数值和
/// 派生字段，录入表单以此确认实际存储的内容。
pub async fn upsert(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(date): Path<String>,
    Json(payload): Json<ClosureUpsert>,
) -> AppResult<Json<DailyClosureView>> {
    let date = time::parse_date(&date)?;
    time::validate_not_future(date, state.config.timezone)?;
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    let record = payload.into_record(date);

    let repo = ClosureRepository::new(state.get_db());
    let stored = repo.upsert(record).await.map_err(AppError::from)?;

    tracing::info!(
        target: "audit",
        event = "closure_upserted",
        date = %date,
        user_id = %user.id,
        username = %user.username,
    );

    Ok(Json(stored.into_view()))
}

/// GET /api/closures/:date - 获取一天的日结记录 (含派生字段)
pub async fn get_by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<DailyClosureView>> {
    let date = time::parse_date(&date)?;

    let repo = ClosureRepository::new(state.get_db());
    let record = repo
        .find_by_date(date)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ClosureNotFound,
                format!("No closure record for {}", date),
            )
        })?;

    Ok(Json(record.into_view()))
}

/// GET /api/closures?year=&month= - 获取一个月的全部日结记录
///
/// 只返回实际存在的记录；日历补位由前端负责，绝不进入统计。
pub async fn list_month(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<DailyClosureView>>> {
    time::validate_month(query.year, query.month)?;

    let repo = ClosureRepository::new(state.get_db());
    let records = repo
        .find_by_month(query.year, query.month)
        .await
        .map_err(AppError::from)?;

    let views = records
        .into_iter()
        .map(|record| record.into_view())
        .collect();

    Ok(Json(views))
}

/// DELETE /api/closures/:date - 删除日结记录 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(date): Path<String>,
) -> AppResult<Json<bool>> {
    let date = time::parse_date(&date)?;

    let repo = ClosureRepository::new(state.get_db());
    let deleted = repo.delete(date).await.map_err(AppError::from)?;

    if deleted {
        tracing::info!(
            target: "audit",
            event = "closure_deleted",
            date = %date,
            user_id = %user.id,
            username = %user.username,
        );
    }

    Ok(Json(deleted))
}
