//! Lenient monetary input parsing
//!
//! The closure entry form submits amounts as whatever the operator left in
//! the field: a number, a numeric string with `.` or `,` as decimal
//! separator, an empty string, or nothing at all. Parsing never fails:
//! anything unparsable coerces to zero. A misentered value is therefore
//! indistinguishable from an intentionally blank field; the upsert response
//! echoes the parsed values so the operator can catch it.

use rust_decimal::Decimal;
use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use super::to_f64;

/// Parse a raw amount string leniently
///
/// Accepts `.` or `,` as the decimal separator; blank and unparsable input
/// parse to zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    trimmed
        .replace(',', ".")
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
}

/// A monetary amount deserialized leniently from JSON
///
/// `null`, a missing field, an empty string, a non-numeric string, a numeric
/// string (either decimal separator), and a plain JSON number all
/// deserialize without error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LenientAmount(pub Decimal);

impl LenientAmount {
    /// The parsed amount rounded to 2 decimal places as f64
    pub fn to_f64(self) -> f64 {
        to_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for LenientAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let amount = match value {
            None | Some(Value::Null) => Decimal::ZERO,
            // Go through the literal text so 7.5 stays exactly 7.5
            Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
            Some(Value::String(s)) => parse_amount(&s),
            Some(_) => Decimal::ZERO,
        };
        Ok(Self(amount))
    }
}
