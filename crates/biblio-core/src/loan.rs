//! # Loan Period
//!
//! Due-date arithmetic. The only temporal rule in the domain: a loan is due
//! [`LOAN_PERIOD_DAYS`] calendar days after the day it was registered.
//!
//! "Today" is always passed in; reading the clock is the caller's job.

use chrono::{Days, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::LOAN_PERIOD_DAYS;

/// Returns the due date for a loan registered on `today`.
///
/// ## Example
/// ```rust
/// use biblio_core::loan::due_date;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
/// let due = due_date(today).unwrap();
/// assert_eq!(due.to_string(), "2025-01-04");
/// ```
pub fn due_date(today: NaiveDate) -> CoreResult<NaiveDate> {
    today
        .checked_add_days(Days::new(LOAN_PERIOD_DAYS))
        .ok_or(CoreError::DateOutOfRange(today))
}

/// Formats a due date the way it travels over the wire (`YYYY-MM-DD`).
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
