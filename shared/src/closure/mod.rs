//! Closure reconciliation engine
//!
//! The whole daily-closure computation lives here as pure synchronous
//! functions: per-day reconciliation, monthly/annual rollups, weekday-relative
//! performance classification, year comparison, and best/worst-day ranking.
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization.
//!
//! The engine accepts a complete slice of persisted records and returns a
//! complete result. Callers must not feed synthesized calendar filler into
//! the aggregators: a padded day for display purposes is not a record.

pub mod aggregate;
pub mod amount;
pub mod compare;
pub mod dedup;
pub mod ranking;
pub mod reconcile;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Monetary values round to 2 decimal places at the f64 boundary
const DECIMAL_PLACES: u32 = 2;

/// Tolerance band for cash reconciliation (±0.50)
pub const CASH_TOLERANCE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Absolute cash-difference threshold that raises a monthly alert (20.00)
pub const ALERT_THRESHOLD: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Convert an f64 monetary value to Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp(DECIMAL_PLACES)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        // Decimal succeeds
        let sum = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(CASH_TOLERANCE, Decimal::new(50, 2));
        assert_eq!(ALERT_THRESHOLD, Decimal::new(20, 0));
    }
}
