//! Best/worst day ranking
//!
//! Orders a year's non-closed days by total receipts, descending for "best"
//! and ascending for "worst", with ties broken by earliest date.

use crate::models::closure::DailyClosureRecord;
use crate::models::statistics::{RankedDay, TopDaysRanking};

use super::reconcile::derive;

/// Default number of entries per list
pub const DEFAULT_LIMIT: usize = 10;

/// Rank a year's non-closed days by total receipts
pub fn rank_days(records: &[DailyClosureRecord], limit: usize) -> TopDaysRanking {
    let mut days: Vec<RankedDay> = records
        .iter()
        .filter(|r| !r.is_closed)
        .map(|r| RankedDay {
            date: r.date,
            total_receipts: derive(r).total_receipts,
            corrispettivi: r.corrispettivi,
        })
        .collect();

    days.sort_by(|a, b| {
        b.total_receipts
            .total_cmp(&a.total_receipts)
            .then(a.date.cmp(&b.date))
    });
    let best: Vec<RankedDay> = days.iter().take(limit).cloned().collect();

    days.sort_by(|a, b| {
        a.total_receipts
            .total_cmp(&b.total_receipts)
            .then(a.date.cmp(&b.date))
    });
    let worst: Vec<RankedDay> = days.into_iter().take(limit).collect();

    TopDaysRanking { best, worst }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: &str, receipts: f64, is_closed: bool) -> DailyClosureRecord {
        DailyClosureRecord {
            date: date.parse::<NaiveDate>().unwrap(),
            corrispettivi: receipts,
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

    fn dates(list: &[RankedDay]) -> Vec<String> {
        list.iter().map(|d| d.date.to_string()).collect()
    }

    #[test]
    fn test_tie_broken_by_earliest_date() {
        // A:500 on Jan 3, B:500 on Jan 1, C:300 on Jan 2
        let records = vec![
            day("2025-01-03", 500.0, false),
            day("2025-01-01", 500.0, false),
            day("2025-01-02", 300.0, false),
        ];

        let ranking = rank_days(&records, 2);
        assert_eq!(dates(&ranking.best), vec!["2025-01-01", "2025-01-03"]);
        assert_eq!(dates(&ranking.worst), vec!["2025-01-02", "2025-01-01"]);
    }

    #[test]
    fn test_closed_days_excluded() {
        let records = vec![
            day("2025-01-01", 900.0, true),
            day("2025-01-02", 100.0, false),
        ];

        let ranking = rank_days(&records, 10);
        assert_eq!(dates(&ranking.best), vec!["2025-01-02"]);
        assert_eq!(dates(&ranking.worst), vec!["2025-01-02"]);
    }

    #[test]
    fn test_limit_truncation() {
        let records: Vec<_> = (1..=20)
            .map(|i| day(&format!("2025-01-{:02}", i), i as f64 * 10.0, false))
            .collect();

        let ranking = rank_days(&records, 5);
        assert_eq!(ranking.best.len(), 5);
        assert_eq!(ranking.worst.len(), 5);
        assert_eq!(ranking.best[0].total_receipts, 200.0);
        assert_eq!(ranking.worst[0].total_receipts, 10.0);
    }

    #[test]
    fn test_empty_input() {
        let ranking = rank_days(&[], 10);
        assert!(ranking.best.is_empty());
        assert!(ranking.worst.is_empty());
    }
}
