//! Weekend and holiday adjustment.
//!
//! This module moves a pay date onto a business day, one calendar day at a
//! time, in the direction implied by the borrower's deposit method.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentDirection, HolidaySet, SkippedDay};

use super::calendar::{add_days, non_business_reason};

/// The default number of days the adjustment may step before giving up.
///
/// A full year is far more than any real holiday calendar needs.
pub const DEFAULT_MAX_ADJUSTMENT_STEPS: u32 = 366;

/// The outcome of moving a date onto a business day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    /// The business day the date was moved to.
    pub date: NaiveDate,
    /// The non-business days stepped over, in visiting order.
    pub skipped: Vec<SkippedDay>,
}

/// Moves `date` onto the nearest business day in `direction`.
///
/// A date that is already a business day is returned unchanged. Otherwise the
/// date is shifted one day at a time until it is neither a weekend day nor a
/// holiday.
///
/// # Errors
///
/// Returns [`EngineError::NoBusinessDayReachable`] if more than `max_steps`
/// days are stepped over. This only happens when the holiday set covers every
/// weekday for that long a stretch. Stepping off either end of the calendar
/// returns [`EngineError::DateOutOfRange`].
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::adjust_for_weekends_and_holidays;
/// use due_date_engine::models::{AdjustmentDirection, HolidaySet};
/// use chrono::NaiveDate;
///
/// // Saturday 2024-05-25, with Monday 2024-05-27 a holiday
/// let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2024, 5, 27).unwrap()].into_iter().collect();
/// let saturday = NaiveDate::from_ymd_opt(2024, 5, 25).unwrap();
///
/// let forward =
///     adjust_for_weekends_and_holidays(saturday, &holidays, AdjustmentDirection::Forward, 366).unwrap();
/// assert_eq!(forward.date, NaiveDate::from_ymd_opt(2024, 5, 28).unwrap());
/// assert_eq!(forward.skipped.len(), 3);
///
/// let backward =
///     adjust_for_weekends_and_holidays(saturday, &holidays, AdjustmentDirection::Backward, 366).unwrap();
/// assert_eq!(backward.date, NaiveDate::from_ymd_opt(2024, 5, 24).unwrap());
/// ```
pub fn adjust_for_weekends_and_holidays(
    date: NaiveDate,
    holidays: &HolidaySet,
    direction: AdjustmentDirection,
    max_steps: u32,
) -> EngineResult<AdjustmentOutcome> {
    let mut adjusted = date;
    let mut skipped = Vec::new();

    while let Some(reason) = non_business_reason(adjusted, holidays) {
        if skipped.len() >= max_steps as usize {
            return Err(EngineError::NoBusinessDayReachable {
                start: date,
                direction,
                max_steps,
            });
        }

        debug!(date = %adjusted, reason = ?reason, direction = %direction, "Skipping non-business day");
        skipped.push(SkippedDay {
            date: adjusted,
            reason,
        });
        adjusted = add_days(adjusted, direction.step_days())?;
    }

    Ok(AdjustmentOutcome {
        date: adjusted,
        skipped,
    })
}
