//! Annual totals and year-over-year comparison

use rust_decimal::Decimal;

use crate::models::closure::DailyClosureRecord;
use crate::models::statistics::{AnnualStatistics, YearComparison};

use super::reconcile::receipts_decimal;
use super::{to_decimal, to_f64};

/// Sum a year's records into [`AnnualStatistics`]
///
/// An empty slice yields zeroed totals, not an error.
pub fn annual_statistics(year: i32, records: &[DailyClosureRecord]) -> AnnualStatistics {
    let mut total_corrispettivi = Decimal::ZERO;
    let mut total_incassi = Decimal::ZERO;

    for record in records {
        total_corrispettivi += to_decimal(record.corrispettivi);
        total_incassi += receipts_decimal(record);
    }

    AnnualStatistics {
        year,
        total_corrispettivi: to_f64(total_corrispettivi),
        total_incassi: to_f64(total_incassi),
        recorded_days: records.len() as u32,
    }
}

/// Percentage delta of `current` against `previous`
///
/// `None` when the previous total is zero: undefined is not the same answer
/// as "no change".
fn pct_delta(current: Decimal, previous: Decimal) -> Option<f64> {
    if previous == Decimal::ZERO {
        return None;
    }
    Some(to_f64((current - previous) / previous * Decimal::ONE_HUNDRED))
}

/// Compare a year's totals against the previous year's
pub fn compare_years(current: AnnualStatistics, previous: AnnualStatistics) -> YearComparison {
    let cur_corr = to_decimal(current.total_corrispettivi);
    let prev_corr = to_decimal(previous.total_corrispettivi);
    let cur_inc = to_decimal(current.total_incassi);
    let prev_inc = to_decimal(previous.total_incassi);

    YearComparison {
        year: current.year,
        delta_corrispettivi: to_f64(cur_corr - prev_corr),
        delta_corrispettivi_pct: pct_delta(cur_corr, prev_corr),
        delta_incassi: to_f64(cur_inc - prev_inc),
        delta_incassi_pct: pct_delta(cur_inc, prev_inc),
        current,
        previous,
    }
}
