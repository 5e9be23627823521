//! Daily Closure Model (日结对账)
//!
//! One record per business date. Monetary fields are stored and serialized as
//! `f64`; every sum and comparison runs through `rust_decimal` inside
//! [`crate::closure`] before being rounded back to two decimal places.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::closure::amount::LenientAmount;

/// Daily closure record - the raw monetary inputs for one business date
///
/// Unique key is `date` (YYYY-MM-DD); re-submitting the same date overwrites
/// the previous values, no history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyClosureRecord {
    /// Business date (ISO, no time component)
    pub date: NaiveDate,
    /// Declared fiscal revenue (corrispettivi)
    #[serde(default)]
    pub corrispettivi: f64,
    /// VAT component at 10%
    #[serde(default)]
    pub iva10: f64,
    /// VAT component at 22%
    #[serde(default)]
    pub iva22: f64,
    /// Invoiced amount for the day
    #[serde(default)]
    pub fatture: f64,

    // -- Payment breakdown (absent means 0) --
    #[serde(default)]
    pub cash_final: f64,
    #[serde(default)]
    pub pos: f64,
    #[serde(default)]
    pub sella: f64,
    #[serde(default)]
    pub stripe_pay: f64,
    #[serde(default)]
    pub bonifici: f64,
    #[serde(default)]
    pub mance: f64,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Day with no commercial activity (distinct from zero revenue)
    #[serde(default)]
    pub is_closed: bool,
}

impl DailyClosureRecord {
    /// Attach the derived reconciliation totals to this record
    pub fn into_view(self) -> DailyClosureView {
        let totals = crate::closure::reconcile::derive(&self);
        DailyClosureView {
            record: self,
            total_receipts: totals.total_receipts,
            cash_diff: totals.cash_diff,
            cash_status: totals.cash_status,
        }
    }
}

/// Upsert payload for one closure date
///
/// Every monetary field is [`LenientAmount`]: blank strings, nulls, and
/// unparsable values coerce to zero so the entry form can submit partial
/// data without tripping validation. The parsed values are echoed back in
/// the response so the operator sees what was actually stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClosureUpsert {
    #[serde(default)]
    pub corrispettivi: LenientAmount,
    #[serde(default)]
    pub iva10: LenientAmount,
    #[serde(default)]
    pub iva22: LenientAmount,
    #[serde(default)]
    pub fatture: LenientAmount,
    #[serde(default)]
    pub cash_final: LenientAmount,
    #[serde(default)]
    pub pos: LenientAmount,
    #[serde(default)]
    pub sella: LenientAmount,
    #[serde(default)]
    pub stripe_pay: LenientAmount,
    #[serde(default)]
    pub bonifici: LenientAmount,
    #[serde(default)]
    pub mance: LenientAmount,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
}

impl ClosureUpsert {
    /// Resolve the lenient fields against a date into a storable record
    pub fn into_record(self, date: NaiveDate) -> DailyClosureRecord {
        DailyClosureRecord {
            date,
            corrispettivi: self.corrispettivi.to_f64(),
            iva10: self.iva10.to_f64(),
            iva22: self.iva22.to_f64(),
            fatture: self.fatture.to_f64(),
            cash_final: self.cash_final.to_f64(),
            pos: self.pos.to_f64(),
            sella: self.sella.to_f64(),
            stripe_pay: self.stripe_pay.to_f64(),
            bonifici: self.bonifici.to_f64(),
            mance: self.mance.to_f64(),
            note: self.note,
            is_closed: self.is_closed,
        }
    }
}

/// Cash reconciliation status for one day
///
/// Tolerance band is a fixed ±0.50: within it the day is `OK`, beyond it the
/// drawer is `OVER` (surplus) or `SHORT` (deficit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashStatus {
    Ok,
    Over,
    Short,
}

/// One closure record with its derived reconciliation fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyClosureView {
    #[serde(flatten)]
    pub record: DailyClosureRecord,
    /// Sum of the six payment-method fields
    pub total_receipts: f64,
    /// `total_receipts - corrispettivi`
    pub cash_diff: f64,
    pub cash_status: CashStatus,
}
