//! Calendar helpers.
//!
//! This module provides date normalization and the weekend/holiday tests used
//! by the schedule projection and business day adjustment.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySet, SkipReason};

/// Converts a date or date-time into its canonical calendar date.
///
/// The canonical calendar date is the UTC date. Date-times carrying an offset
/// are converted to UTC first; naive date-times are taken to already be UTC.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::ToCalendarDate;
/// use chrono::{DateTime, NaiveDate};
///
/// // 23:30 at UTC-05:00 is already the next day in UTC
/// let late_evening = DateTime::parse_from_rfc3339("2024-05-01T23:30:00-05:00").unwrap();
/// assert_eq!(late_evening.to_calendar_date(), NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
/// ```
pub trait ToCalendarDate {
    /// Returns the canonical calendar date.
    fn to_calendar_date(&self) -> NaiveDate;
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> NaiveDate {
        self.with_timezone(&Utc).date_naive()
    }
}

/// Strips any time-of-day component, returning the canonical calendar date.
///
/// Normalizing a [`NaiveDate`] returns it unchanged, so normalization is
/// idempotent.
pub fn normalize<D: ToCalendarDate + ?Sized>(date: &D) -> NaiveDate {
    date.to_calendar_date()
}

/// Adds a (possibly negative) number of days to a date.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the result falls outside the
/// range chrono can represent.
pub fn add_days(date: NaiveDate, days: i64) -> EngineResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(EngineError::DateOutOfRange { date })
}

/// Returns `true` for Saturday and Sunday.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-05-25 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 5, 25).unwrap()));
/// // 2024-05-24 is a Friday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 5, 24).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns `true` if the date is in the holiday set.
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Returns `true` if the date is neither a weekend day nor a holiday.
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    non_business_reason(date, holidays).is_none()
}

/// Returns why a date is not a business day, or `None` if it is one.
///
/// A holiday that falls on a weekend is reported as a weekend.
pub fn non_business_reason(date: NaiveDate, holidays: &HolidaySet) -> Option<SkipReason> {
    if is_weekend(date) {
        Some(SkipReason::Weekend)
    } else if is_holiday(date, holidays) {
        Some(SkipReason::Holiday)
    } else {
        None
    }
}
