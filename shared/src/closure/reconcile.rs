//! Per-day cash reconciliation
//!
//! Derives the reconciled totals for a single closure record. Pure and
//! infallible: malformed input was already coerced to zero at the parsing
//! boundary, so there is nothing left to fail on here.

use rust_decimal::Decimal;

use crate::models::closure::{CashStatus, DailyClosureRecord};

use super::{CASH_TOLERANCE, to_decimal, to_f64};

/// Derived reconciliation fields for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosureTotals {
    /// Sum of the six payment-method fields
    pub total_receipts: f64,
    /// `total_receipts - corrispettivi`
    pub cash_diff: f64,
    pub cash_status: CashStatus,
}

impl CashStatus {
    /// Classify a cash difference against the fixed tolerance band
    pub fn classify(cash_diff: Decimal) -> Self {
        if cash_diff.abs() < CASH_TOLERANCE {
            Self::Ok
        } else if cash_diff > Decimal::ZERO {
            Self::Over
        } else {
            Self::Short
        }
    }
}

/// Sum the six payment-method fields of a record as Decimal
pub(crate) fn receipts_decimal(record: &DailyClosureRecord) -> Decimal {
    to_decimal(record.cash_final)
        + to_decimal(record.pos)
        + to_decimal(record.sella)
        + to_decimal(record.stripe_pay)
        + to_decimal(record.bonifici)
        + to_decimal(record.mance)
}

/// Compute the derived totals for one record
pub fn derive(record: &DailyClosureRecord) -> ClosureTotals {
    let total_receipts = receipts_decimal(record);
    let cash_diff = total_receipts - to_decimal(record.corrispettivi);

    ClosureTotals {
        total_receipts: to_f64(total_receipts),
        cash_diff: to_f64(cash_diff),
        cash_status: CashStatus::classify(cash_diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(corrispettivi: f64, payments: [f64; 6]) -> DailyClosureRecord {
        DailyClosureRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            corrispettivi,
            iva10: 0.0,
            iva22: 0.0,
            fatture: 0.0,
            cash_final: payments[0],
            pos: payments[1],
            sella: payments[2],
            stripe_pay: payments[3],
            bonifici: payments[4],
            mance: payments[5],
            note: None,
            is_closed: false,
        }
    }

    #[test]
    fn test_total_receipts_sums_all_methods() {
        let totals = derive(&record(0.0, [100.0, 250.5, 30.0, 19.5, 0.0, 12.0]));
        assert_eq!(totals.total_receipts, 412.0);
    }

    #[test]
    fn test_sum_is_order_independent() {
        // Same six values in different field positions must give the same sum
        let a = derive(&record(0.0, [0.1, 0.2, 0.3, 0.4, 0.5, 0.6]));
        let b = derive(&record(0.0, [0.6, 0.5, 0.4, 0.3, 0.2, 0.1]));
        assert_eq!(a.total_receipts, b.total_receipts);
        assert_eq!(a.total_receipts, 2.1);
    }

    #[test]
    fn test_cash_diff() {
        let totals = derive(&record(500.0, [300.0, 180.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(totals.cash_diff, -20.0);
        assert_eq!(totals.cash_status, CashStatus::Short);
    }

    #[test]
    fn test_status_within_tolerance_is_ok() {
        let totals = derive(&record(500.0, [500.49, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(totals.cash_status, CashStatus::Ok);

        let totals = derive(&record(500.0, [499.51, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(totals.cash_status, CashStatus::Ok);
    }

    #[test]
    fn test_status_at_tolerance_boundary() {
        // |diff| == 0.5 is outside the OK band
        let totals = derive(&record(500.0, [500.5, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(totals.cash_status, CashStatus::Over);

        let totals = derive(&record(500.0, [499.5, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(totals.cash_status, CashStatus::Short);
    }

    #[test]
    fn test_exactly_one_status_holds() {
        for receipts in [0.0, 480.0, 499.5, 499.51, 500.0, 500.49, 500.5, 530.0] {
            let totals = derive(&record(500.0, [receipts, 0.0, 0.0, 0.0, 0.0, 0.0]));
            let diff = totals.cash_diff;
            match totals.cash_status {
                CashStatus::Ok => assert!(diff.abs() < 0.5),
                CashStatus::Over => assert!(diff >= 0.5),
                CashStatus::Short => assert!(diff <= -0.5),
            }
        }
    }

    #[test]
    fn test_all_zero_record() {
        let totals = derive(&record(0.0, [0.0; 6]));
        assert_eq!(totals.total_receipts, 0.0);
        assert_eq!(totals.cash_diff, 0.0);
        assert_eq!(totals.cash_status, CashStatus::Ok);
    }
}
