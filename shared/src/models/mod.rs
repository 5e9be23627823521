//! Domain models (数据模型)

pub mod closure;
pub mod statistics;

pub use closure::{CashStatus, ClosureUpsert, DailyClosureRecord, DailyClosureView};
pub use statistics::{
    AnnualStatistics, CashAlert, DayPerformance, MonthlyStatistics, PaymentTotals, RankedDay,
    TopDaysRanking, YearComparison,
};
