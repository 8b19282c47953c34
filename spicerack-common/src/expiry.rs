//! Expiry status evaluation
//!
//! Condiments store their expiry date as ISO `YYYY-MM-DD` text (or nothing).
//! Status flags are derived at read time and never persisted.

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used for expiry dates throughout the application
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Derived expiry flags for one condiment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpiryStatus {
    /// Expiry date is today or in the past
    pub is_expired: bool,
    /// Expiry date is within the threshold window, but not yet reached
    pub near_expiry: bool,
}

/// Evaluate the expiry flags for a nullable date string.
///
/// A missing, blank or unparseable date yields both flags false; malformed
/// dates are treated as "no expiry", never as an error. With
/// `days_left = expiry - today`:
/// - `is_expired` iff `days_left <= 0` (a condiment expiring today counts
///   as expired)
/// - `near_expiry` iff `0 < days_left <= threshold_days`
///
/// The two flags are mutually exclusive by construction.
pub fn evaluate_expiry(expiry: Option<&str>, today: NaiveDate, threshold_days: i64) -> ExpiryStatus {
    let Some(raw) = expiry else {
        return ExpiryStatus::default();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return ExpiryStatus::default();
    }
    let Ok(date) = NaiveDate::parse_from_str(raw, EXPIRY_DATE_FORMAT) else {
        return ExpiryStatus::default();
    };

    let days_left = (date - today).num_days();
    ExpiryStatus {
        is_expired: days_left <= 0,
        near_expiry: days_left > 0 && days_left <= threshold_days,
    }
}
