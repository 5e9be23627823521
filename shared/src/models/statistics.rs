//! Statistics Models (统计数据)
//!
//! Derived aggregates over daily closure records. All of these are computed
//! on read by [`crate::closure`], never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::closure::CashStatus;

/// Per-method payment sums across a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub cash_final: f64,
    pub pos: f64,
    pub sella: f64,
    pub stripe_pay: f64,
    pub bonifici: f64,
    pub mance: f64,
}

/// A day whose cash difference crossed the alert threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashAlert {
    pub date: NaiveDate,
    pub cash_diff: f64,
    pub cash_status: CashStatus,
}

/// Monthly rollup over the closure records that exist for one calendar month
///
/// `average_corrispettivi` is `None` (never zero, never NaN) when no day
/// qualifies for the average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Sum of corrispettivi over all recorded days
    pub total_corrispettivi: f64,
    /// Sum of total_receipts over all recorded days
    pub total_incassi: f64,
    /// Mean corrispettivi over open days with activity, if any qualify
    pub average_corrispettivi: Option<f64>,
    /// Number of days included in the average
    pub open_days_count: u32,
    pub payment_totals: PaymentTotals,
    pub alerts: Vec<CashAlert>,
}

/// Day performance relative to its own weekday's monthly baseline
///
/// Mondays are compared to Mondays: a scheduled slow weekday does not drag
/// every one of its days into WEAK territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayPerformance {
    Strong,
    Normal,
    Weak,
}

/// Annual rollup across all recorded days of a calendar year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualStatistics {
    pub year: i32,
    pub total_corrispettivi: f64,
    pub total_incassi: f64,
    /// Number of persisted closure records in the year
    pub recorded_days: u32,
}

/// Year-over-year comparison for a year against the previous one
///
/// Percentage deltas are `None` when the prior-year total is zero: "undefined"
/// and "no change" must stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearComparison {
    pub year: i32,
    pub current: AnnualStatistics,
    pub previous: AnnualStatistics,
    pub delta_corrispettivi: f64,
    pub delta_corrispettivi_pct: Option<f64>,
    pub delta_incassi: f64,
    pub delta_incassi_pct: Option<f64>,
}

/// One entry of the best/worst days ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDay {
    pub date: NaiveDate,
    pub total_receipts: f64,
    pub corrispettivi: f64,
}

/// Best and worst N days of a year by total receipts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDaysRanking {
    pub best: Vec<RankedDay>,
    pub worst: Vec<RankedDay>,
}
