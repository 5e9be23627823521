//! Statistics API Handlers
//!
//! Thin layer over `shared::closure`: fetch the persisted records for the
//! requested period and hand them to the pure engine. No aggregation happens
//! in queries, so a live-preview client using the same engine can never
//! disagree with these responses.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::closure::{aggregate, compare, ranking, reconcile};
use shared::models::{
    AnnualStatistics, CashStatus, DayPerformance, MonthlyStatistics, TopDaysRanking,
    YearComparison,
};

use crate::core::ServerState;
use crate::db::repository::ClosureRepository;
use crate::utils::{AppError, AppResult, time};

// ============================================================================
// Response Types
// ============================================================================

/// One day of the monthly report
#[derive(Debug, Clone, Serialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub corrispettivi: f64,
    pub total_receipts: f64,
    pub is_closed: bool,
    pub cash_diff: f64,
    pub cash_status: CashStatus,
    /// Absent for closed days and weekdays without a baseline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<DayPerformance>,
}

/// Full monthly statistics response
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyResponse {
    pub statistics: MonthlyStatistics,
    /// Mean receipts per weekday, index 0=Sunday ... 6=Saturday
    pub weekday_baselines: [Option<f64>; 7],
    pub days: Vec<DayDetail>,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnnualQuery {
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct TopDaysQuery {
    pub year: i32,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    ranking::DEFAULT_LIMIT
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/statistics/monthly?year=&month= - 月度统计
pub async fn get_monthly(
    State(state): State<ServerState>,
    Query(query): Query<MonthlyQuery>,
) -> AppResult<Json<MonthlyResponse>> {
    time::validate_month(query.year, query.month)?;

    let repo = ClosureRepository::new(state.get_db());
    let records = repo
        .find_by_month(query.year, query.month)
        .await
        .map_err(AppError::from)?;

    tracing::debug!(
        year = query.year,
        month = query.month,
        records = records.len(),
        "Computing monthly statistics"
    );

    let statistics = aggregate::monthly_statistics(query.year, query.month, &records);
    let weekday_baselines = aggregate::weekday_baselines(&records);

    let days = records
        .iter()
        .map(|record| {
            let totals = reconcile::derive(record);
            DayDetail {
                date: record.date,
                corrispettivi: record.corrispettivi,
                total_receipts: totals.total_receipts,
                is_closed: record.is_closed,
                cash_diff: totals.cash_diff,
                cash_status: totals.cash_status,
                performance: aggregate::classify_day(record, &weekday_baselines),
            }
        })
        .collect();

    Ok(Json(MonthlyResponse {
        statistics,
        weekday_baselines,
        days,
    }))
}

/// GET /api/statistics/annual?year= - 年度统计
pub async fn get_annual(
    State(state): State<ServerState>,
    Query(query): Query<AnnualQuery>,
) -> AppResult<Json<AnnualStatistics>> {
    let repo = ClosureRepository::new(state.get_db());
    let records = repo.find_by_year(query.year).await.map_err(AppError::from)?;

    Ok(Json(compare::annual_statistics(query.year, &records)))
}

/// GET /api/statistics/comparison?year= - 同比上一年
pub async fn get_comparison(
    State(state): State<ServerState>,
    Query(query): Query<AnnualQuery>,
) -> AppResult<Json<YearComparison>> {
    let repo = ClosureRepository::new(state.get_db());

    let current_records = repo.find_by_year(query.year).await.map_err(AppError::from)?;
    let previous_records = repo
        .find_by_year(query.year - 1)
        .await
        .map_err(AppError::from)?;

    let current = compare::annual_statistics(query.year, &current_records);
    let previous = compare::annual_statistics(query.year - 1, &previous_records);

    Ok(Json(compare::compare_years(current, previous)))
}

/// GET /api/statistics/top-days?year=&limit= - 最佳/最差营业日
pub async fn get_top_days(
    State(state): State<ServerState>,
    Query(query): Query<TopDaysQuery>,
) -> AppResult<Json<TopDaysRanking>> {
    let repo = ClosureRepository::new(state.get_db());
    let records = repo.find_by_year(query.year).await.map_err(AppError::from)?;

    Ok(Json(ranking::rank_days(&records, query.limit)))
}
