//! Expense record model
//!
//! Records are stored exactly as entered. Amount and day are kept as text and
//! only coerced to numbers when a ledger is aggregated.

use serde::{Deserialize, Serialize};

/// One row of a monthly ledger
///
/// Field names map to the `Amount,Day,Reason` CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "Amount")]
    pub amount: String,

    #[serde(rename = "Day")]
    pub day: String,

    #[serde(rename = "Reason")]
    pub reason: String,
}

impl ExpenseRecord {
    /// Create a record from raw form input
    pub fn new(
        amount: impl Into<String>,
        day: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            day: day.into(),
            reason: reason.into(),
        }
    }

    /// The amount as a number, or `None` when the stored text is not numeric
    pub fn amount_value(&self) -> Option<f64> {
        coerce_amount(&self.amount)
    }

    /// The day as a day number, or `None` when the stored text is not numeric
    pub fn day_number(&self) -> Option<u32> {
        coerce_day(&self.day)
    }

    /// Whether this record belongs to the given category (exact, case-sensitive)
    pub fn is_category(&self, category: &str) -> bool {
        self.reason == category
    }
}

/// Coerce stored amount text to a number
///
/// Blank, non-numeric and non-finite values become missing.
pub fn coerce_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Coerce stored day text to a day number
///
/// Accepts integral values written either as "7" or "7.0". Range is not
/// checked against the month's length.
pub fn coerce_day(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(day) = raw.parse::<u32>() {
        return Some(day);
    }

    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("10"), Some(10.0));
        assert_eq!(coerce_amount("5.5"), Some(5.5));
        assert_eq!(coerce_amount(" 7.25 "), Some(7.25));
        assert_eq!(coerce_amount("-3"), Some(-3.0));
        assert_eq!(coerce_amount("abc"), None);
        assert_eq!(coerce_amount(""), None);
        assert_eq!(coerce_amount("NaN"), None);
        assert_eq!(coerce_amount("inf"), None);
    }

    #[test]
    fn test_coerce_day() {
        assert_eq!(coerce_day("1"), Some(1));
        assert_eq!(coerce_day("31"), Some(31));
        assert_eq!(coerce_day("45"), Some(45));
        assert_eq!(coerce_day("7.0"), Some(7));
        assert_eq!(coerce_day("7.5"), None);
        assert_eq!(coerce_day("-2"), None);
        assert_eq!(coerce_day("monday"), None);
    }

    #[test]
    fn test_record_helpers() {
        let record = ExpenseRecord::new("12.5", "3", "Food");
        assert_eq!(record.amount_value(), Some(12.5));
        assert_eq!(record.day_number(), Some(3));
        assert!(record.is_category("Food"));
        assert!(!record.is_category("food"));
    }
}
