//! Monthly aggregation
//!
//! Rolls a month's persisted closure records up into [`MonthlyStatistics`],
//! per-weekday baselines, and per-day performance classes. The input is only
//! ever the records that actually exist - calendar padding synthesized for
//! display must never reach these functions, or it would dilute averages and
//! baselines with phantom zero days.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::closure::DailyClosureRecord;
use crate::models::statistics::{CashAlert, DayPerformance, MonthlyStatistics, PaymentTotals};

use super::reconcile::receipts_decimal;
use super::{ALERT_THRESHOLD, to_decimal, to_f64};

/// Ratio at or above which a day is STRONG (1.15)
const STRONG_RATIO: Decimal = Decimal::from_parts(115, 0, 0, false, 2);

/// Ratio below which a day is WEAK (0.90)
const WEAK_RATIO: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Weekday index with 0=Sunday ... 6=Saturday
pub fn weekday_index(record: &DailyClosureRecord) -> usize {
    record.date.weekday().num_days_from_sunday() as usize
}

/// Roll one month's records up into totals, average, and alerts
///
/// Totals sum over every record (closed days contribute zero naturally).
/// The average and `open_days_count` cover exactly the days with
/// `is_closed == false` and `total_receipts > 0`: a day with no recorded
/// activity is excluded from the mean, not counted as a zero.
pub fn monthly_statistics(
    year: i32,
    month: u32,
    records: &[DailyClosureRecord],
) -> MonthlyStatistics {
    let mut total_corrispettivi = Decimal::ZERO;
    let mut total_incassi = Decimal::ZERO;

    let mut cash_final = Decimal::ZERO;
    let mut pos = Decimal::ZERO;
    let mut sella = Decimal::ZERO;
    let mut stripe_pay = Decimal::ZERO;
    let mut bonifici = Decimal::ZERO;
    let mut mance = Decimal::ZERO;

    let mut qualifying_corrispettivi = Decimal::ZERO;
    let mut open_days_count: u32 = 0;

    let mut alerts = Vec::new();

    for record in records {
        let receipts = receipts_decimal(record);
        let corrispettivi = to_decimal(record.corrispettivi);
        let cash_diff = receipts - corrispettivi;

        total_corrispettivi += corrispettivi;
        total_incassi += receipts;

        cash_final += to_decimal(record.cash_final);
        pos += to_decimal(record.pos);
        sella += to_decimal(record.sella);
        stripe_pay += to_decimal(record.stripe_pay);
        bonifici += to_decimal(record.bonifici);
        mance += to_decimal(record.mance);

        if !record.is_closed && receipts > Decimal::ZERO {
            qualifying_corrispettivi += corrispettivi;
            open_days_count += 1;
        }

        // Closed days are checked too; their zero fields never trigger
        if cash_diff.abs() >= ALERT_THRESHOLD {
            alerts.push(CashAlert {
                date: record.date,
                cash_diff: to_f64(cash_diff),
                cash_status: crate::models::closure::CashStatus::classify(cash_diff),
            });
        }
    }

    let average_corrispettivi = if open_days_count > 0 {
        Some(to_f64(
            qualifying_corrispettivi / Decimal::from(open_days_count),
        ))
    } else {
        None
    };

    MonthlyStatistics {
        year,
        month,
        total_corrispettivi: to_f64(total_corrispettivi),
        total_incassi: to_f64(total_incassi),
        average_corrispettivi,
        open_days_count,
        payment_totals: PaymentTotals {
            cash_final: to_f64(cash_final),
            pos: to_f64(pos),
            sella: to_f64(sella),
            stripe_pay: to_f64(stripe_pay),
            bonifici: to_f64(bonifici),
            mance: to_f64(mance),
        },
        alerts,
    }
}

/// Mean total receipts per weekday across the month's non-closed days
///
/// Index 0=Sunday ... 6=Saturday. A weekday with no qualifying day has no
/// baseline (`None`), not a zero one.
pub fn weekday_baselines(records: &[DailyClosureRecord]) -> [Option<f64>; 7] {
    let mut sums = [Decimal::ZERO; 7];
    let mut counts = [0u32; 7];

    for record in records {
        if record.is_closed {
            continue;
        }
        let idx = weekday_index(record);
        sums[idx] += receipts_decimal(record);
        counts[idx] += 1;
    }

    std::array::from_fn(|idx| {
        if counts[idx] > 0 {
            Some(to_f64(sums[idx] / Decimal::from(counts[idx])))
        } else {
            None
        }
    })
}

/// Classify one day's performance against its own weekday's baseline
///
/// Closed days are not classified. A day whose weekday has no baseline (or
/// a zero one) stays unclassified - NORMAL is never used as a default.
pub fn classify_day(
    record: &DailyClosureRecord,
    baselines: &[Option<f64>; 7],
) -> Option<DayPerformance> {
    if record.is_closed {
        return None;
    }

    let baseline = to_decimal(baselines[weekday_index(record)]?);
    if baseline <= Decimal::ZERO {
        return None;
    }

    let ratio = receipts_decimal(record) / baseline;
    if ratio >= STRONG_RATIO {
        Some(DayPerformance::Strong)
    } else if ratio >= WEAK_RATIO {
        Some(DayPerformance::Normal)
    } else {
        Some(DayPerformance::Weak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::closure::CashStatus;
    use chrono::NaiveDate;

    fn day(date: &str, corrispettivi: f64, receipts: f64, is_closed: bool) -> DailyClosureRecord {
        DailyClosureRecord {
            date: date.parse::<NaiveDate>().unwrap(),
            corrispettivi,
            iva10: 0.0,
            iva22: 0.0,
            fatture: 0.0,
            cash_final: receipts,
            pos: 0.0,
            sella: 0.0,
            stripe_pay: 0.0,
            bonifici: 0.0,
            mance: 0.0,
            note: None,
            is_closed,
        }
    }

    #[test]
    fn test_empty_month() {
        let stats = monthly_statistics(2025, 2, &[]);
        assert_eq!(stats.total_corrispettivi, 0.0);
        assert_eq!(stats.total_incassi, 0.0);
        assert_eq!(stats.average_corrispettivi, None);
        assert_eq!(stats.open_days_count, 0);
        assert!(stats.alerts.is_empty());
    }

    #[test]
    fn test_average_excludes_closed_and_inactive_days() {
        // Mon:100, Tue:0 (open, no activity), Wed:closed, Thu:200
        let records = vec![
            day("2025-03-03", 100.0, 100.0, false),
            day("2025-03-04", 0.0, 0.0, false),
            day("2025-03-05", 0.0, 0.0, true),
            day("2025-03-06", 200.0, 200.0, false),
        ];

        let stats = monthly_statistics(2025, 3, &records);
        assert_eq!(stats.average_corrispettivi, Some(150.0));
        // open_days_count tracks the same predicate as the average
        assert_eq!(stats.open_days_count, 2);
        assert_eq!(stats.total_corrispettivi, 300.0);
        assert_eq!(stats.total_incassi, 300.0);
    }

    #[test]
    fn test_totals_include_every_record() {
        let records = vec![
            day("2025-03-03", 100.0, 90.0, false),
            day("2025-03-04", 50.0, 50.0, false),
        ];
        let stats = monthly_statistics(2025, 3, &records);
        assert_eq!(stats.total_corrispettivi, 150.0);
        assert_eq!(stats.total_incassi, 140.0);
    }

    #[test]
    fn test_alert_threshold() {
        let records = vec![
            // diff -19.99: below threshold
            day("2025-03-03", 100.0, 80.01, false),
            // diff -20: alert
            day("2025-03-04", 100.0, 80.0, false),
            // diff +25: alert
            day("2025-03-05", 100.0, 125.0, false),
        ];
        let stats = monthly_statistics(2025, 3, &records);

        assert_eq!(stats.alerts.len(), 2);
        assert_eq!(
            stats.alerts[0],
            CashAlert {
                date: "2025-03-04".parse().unwrap(),
                cash_diff: -20.0,
                cash_status: CashStatus::Short,
            }
        );
        assert_eq!(stats.alerts[1].cash_diff, 25.0);
        assert_eq!(stats.alerts[1].cash_status, CashStatus::Over);
    }

    #[test]
    fn test_payment_totals() {
        let mut monday = day("2025-03-03", 0.0, 0.0, false);
        monday.pos = 120.0;
        monday.mance = 5.5;
        let mut tuesday = day("2025-03-04", 0.0, 0.0, false);
        tuesday.pos = 80.0;
        tuesday.bonifici = 200.0;

        let stats = monthly_statistics(2025, 3, &[monday, tuesday]);
        assert_eq!(stats.payment_totals.pos, 200.0);
        assert_eq!(stats.payment_totals.bonifici, 200.0);
        assert_eq!(stats.payment_totals.mance, 5.5);
        assert_eq!(stats.payment_totals.cash_final, 0.0);
    }

    #[test]
    fn test_weekday_baselines() {
        // Two Mondays (2025-03-03, 2025-03-10), one Tuesday, closed Wednesday
        let records = vec![
            day("2025-03-03", 0.0, 100.0, false),
            day("2025-03-10", 0.0, 200.0, false),
            day("2025-03-04", 0.0, 80.0, false),
            day("2025-03-05", 0.0, 0.0, true),
        ];

        let baselines = weekday_baselines(&records);
        assert_eq!(baselines[1], Some(150.0)); // Monday
        assert_eq!(baselines[2], Some(80.0)); // Tuesday
        assert_eq!(baselines[3], None); // Wednesday: closed day does not count
        assert_eq!(baselines[0], None); // Sunday: no records at all
    }

    #[test]
    fn test_classify_day_bands() {
        let records = vec![
            day("2025-03-03", 0.0, 100.0, false),
            day("2025-03-10", 0.0, 100.0, false),
        ];
        let baselines = weekday_baselines(&records); // Monday baseline = 100

        let strong = day("2025-03-17", 0.0, 115.0, false);
        assert_eq!(
            classify_day(&strong, &baselines),
            Some(DayPerformance::Strong)
        );

        let normal_high = day("2025-03-17", 0.0, 114.99, false);
        assert_eq!(
            classify_day(&normal_high, &baselines),
            Some(DayPerformance::Normal)
        );

        let normal_low = day("2025-03-17", 0.0, 90.0, false);
        assert_eq!(
            classify_day(&normal_low, &baselines),
            Some(DayPerformance::Normal)
        );

        let weak = day("2025-03-17", 0.0, 89.99, false);
        assert_eq!(classify_day(&weak, &baselines), Some(DayPerformance::Weak));
    }

    #[test]
    fn test_classify_day_without_baseline() {
        // Restaurant always closed on Wednesdays: no baseline, no class
        let records = vec![day("2025-03-05", 0.0, 0.0, true)];
        let baselines = weekday_baselines(&records);
        assert_eq!(baselines[3], None);

        let wednesday = day("2025-03-12", 0.0, 500.0, false);
        assert_eq!(classify_day(&wednesday, &baselines), None);
    }

    #[test]
    fn test_classify_closed_day_is_none() {
        let records = vec![day("2025-03-03", 0.0, 100.0, false)];
        let baselines = weekday_baselines(&records);

        let closed_monday = day("2025-03-10", 0.0, 0.0, true);
        assert_eq!(classify_day(&closed_monday, &baselines), None);
    }

    #[test]
    fn test_classify_zero_baseline_is_none() {
        // Open days with zero receipts produce a zero baseline; a ratio
        // against it is meaningless, so the day stays unclassified.
        let records = vec![day("2025-03-03", 0.0, 0.0, false)];
        let baselines = weekday_baselines(&records);
        assert_eq!(baselines[1], Some(0.0));

        let monday = day("2025-03-10", 0.0, 50.0, false);
        assert_eq!(classify_day(&monday, &baselines), None);
    }
}
