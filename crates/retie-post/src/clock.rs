//! Time source abstraction and date formatting
//!
//! Posts carry a locale-formatted creation date. Going through a [`Clock`]
//! trait keeps the stamp deterministic under test while production code uses
//! the local calendar.

use chrono::{Datelike, Local, NaiveDate};

/// Source of "today" for date stamping
///
/// # Contract
/// - Must be cheap to call (invoked once per post creation and once per seed)
/// - Successive calls within one operation must return the same date
pub trait Clock {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create new system clock
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Format a date in the ko-KR convention (`2026. 8. 30.`)
///
/// No zero padding, a trailing period, spaces after each separator. The
/// result is stored verbatim in the post record and never parsed back.
#[must_use]
pub fn format_ko_kr(date: NaiveDate) -> String {
    format!("{}. {}. {}.", date.year(), date.month(), date.day())
}
