//! Pay schedule projection.
//!
//! A pay schedule is defined by a single anchor date (the reference pay date)
//! and a [`PaySpan`]. This module finds schedule occurrences relative to an
//! arbitrary date without stepping through every intermediate pay date.

use chrono::{Datelike, Months, NaiveDate};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::PaySpan;

use super::calendar::add_days;

/// Finds the next pay date on the schedule after `after`.
///
/// For weekly and bi-weekly spans the number of whole periods between the
/// anchor and `after` is computed by ceiling division, so the cost does not
/// depend on how far apart the two dates are. A projected date that lands
/// exactly on `after` is pushed one more period out: the result is always
/// strictly after `after`, and the anchor may lie on either side of it.
///
/// For monthly spans the anchor's day-of-month is reused. The target month is
/// the month of `after` when that day is still ahead within it, otherwise the
/// following month. Days that do not exist in the target month clamp to its
/// last day, which can coincide with `after` itself.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the next pay date lies beyond
/// the last representable calendar date.
///
/// # Arguments
///
/// * `after` - The date the pay date must follow
/// * `pay_span` - The schedule interval
/// * `reference_pay_date` - A known pay date on the schedule
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::next_pay_date_on_or_after;
/// use due_date_engine::models::PaySpan;
/// use chrono::NaiveDate;
///
/// let after = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
///
/// assert_eq!(
///     next_pay_date_on_or_after(after, PaySpan::BiWeekly, reference).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 24).unwrap()
/// );
///
/// // Day 31 clamps to the end of April
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let after = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
/// assert_eq!(
///     next_pay_date_on_or_after(after, PaySpan::Monthly, reference).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
/// );
/// ```
pub fn next_pay_date_on_or_after(
    after: NaiveDate,
    pay_span: PaySpan,
    reference_pay_date: NaiveDate,
) -> EngineResult<NaiveDate> {
    match pay_span.period_days() {
        Some(period) => next_periodic_pay_date(after, reference_pay_date, period),
        None => next_monthly_pay_date(after, reference_pay_date),
    }
}

fn next_periodic_pay_date(
    after: NaiveDate,
    reference: NaiveDate,
    period: i64,
) -> EngineResult<NaiveDate> {
    let elapsed = (after - reference).num_days();
    let periods = ceil_div(elapsed, period);
    let candidate = add_days(reference, periods * period)?;

    if candidate == after {
        add_days(candidate, period)
    } else {
        Ok(candidate)
    }
}

/// Ceiling division for a positive divisor, correct for negative numerators.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    let quotient = numerator.div_euclid(divisor);
    if numerator.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

fn next_monthly_pay_date(after: NaiveDate, reference: NaiveDate) -> EngineResult<NaiveDate> {
    let ref_day = reference.day();
    let mut year = after.year();
    let mut month = after.month();

    if ref_day <= after.day() {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    // Walk back from the anchor day until the date exists in the target month.
    let mut pay_date = (1..=ref_day)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(EngineError::DateOutOfRange { date: after })?;

    let is_same_month = pay_date.month() == after.month();
    let is_next_month = pay_date.month() == after.month() % 12 + 1;
    if !is_same_month && !is_next_month {
        warn!(
            after = %after,
            pay_date = %pay_date,
            "Monthly pay date rolled past the target month; stepping back"
        );
        pay_date = add_days(pay_date, -1)?;
    }

    Ok(pay_date)
}

/// Lists the next `limit` pay dates strictly after `after`, stepping the
/// schedule one occurrence at a time.
///
/// Monthly occurrences are computed as whole months from the anchor, so a
/// day-31 anchor yields the last day of shorter months without drifting.
/// This is the slow counterpart of [`next_pay_date_on_or_after`]; the two
/// agree except where a clamped monthly date falls exactly on `after`.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::pay_dates_after;
/// use due_date_engine::models::PaySpan;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let after = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let dates = pay_dates_after(PaySpan::Monthly, reference, after, 3);
/// assert_eq!(
///     dates,
///     vec![
///         NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
///     ]
/// );
/// ```
pub fn pay_dates_after(
    pay_span: PaySpan,
    reference_pay_date: NaiveDate,
    after: NaiveDate,
    limit: usize,
) -> Vec<NaiveDate> {
    let occurrence = |index: i64| -> Option<NaiveDate> {
        match pay_span.period_days() {
            Some(period) => reference_pay_date.checked_add_signed(chrono::Duration::days(index * period)),
            None => {
                let months = Months::new(u32::try_from(index.unsigned_abs()).ok()?);
                if index >= 0 {
                    reference_pay_date.checked_add_months(months)
                } else {
                    reference_pay_date.checked_sub_months(months)
                }
            }
        }
    };

    // Rewind to the last occurrence on or before `after`.
    let mut index = 0;
    while let Some(date) = occurrence(index) {
        if date <= after {
            break;
        }
        index -= 1;
    }

    let mut dates = Vec::with_capacity(limit);
    while dates.len() < limit {
        match occurrence(index) {
            Some(date) if date > after => dates.push(date),
            Some(_) => {}
            None => break,
        }
        index += 1;
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==========================================================================
    // Weekly and bi-weekly projection
    // ==========================================================================
    #[test]
    fn test_bi_weekly_one_day_past_anchor() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 11), PaySpan::BiWeekly, date(2024, 5, 10)).unwrap(),
            date(2024, 5, 24)
        );
    }

    #[test]
    fn test_weekly_one_day_past_anchor() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 11), PaySpan::Weekly, date(2024, 5, 10)).unwrap(),
            date(2024, 5, 17)
        );
    }

    #[test]
    fn test_weekly_exact_match_advances_one_period() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 17), PaySpan::Weekly, date(2024, 5, 10)).unwrap(),
            date(2024, 5, 24)
        );
    }

    #[test]
    fn test_bi_weekly_exact_match_advances_one_period() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 24), PaySpan::BiWeekly, date(2024, 5, 10)).unwrap(),
            date(2024, 6, 7)
        );
    }

    #[test]
    fn test_anchor_equal_to_after_advances_one_period() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 10), PaySpan::Weekly, date(2024, 5, 10)).unwrap(),
            date(2024, 5, 17)
        );
    }

    #[test]
    fn test_anchor_after_target_projects_backwards() {
        // Anchor 10 days after the target: one week back lands 3 days after it
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 1), PaySpan::Weekly, date(2024, 5, 11)).unwrap(),
            date(2024, 5, 4)
        );
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 5, 1), PaySpan::BiWeekly, date(2024, 6, 28)).unwrap(),
            date(2024, 5, 3)
        );
    }

    #[test]
    fn test_anchor_far_in_the_past() {
        // 2020-01-03 is a Friday; Fridays stay Fridays
        let result =
            next_pay_date_on_or_after(date(2024, 5, 11), PaySpan::Weekly, date(2020, 1, 3)).unwrap();
        assert_eq!(result, date(2024, 5, 17));
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(1, 7), 1);
        assert_eq!(ceil_div(7, 7), 1);
        assert_eq!(ceil_div(8, 7), 2);
        assert_eq!(ceil_div(0, 7), 0);
        assert_eq!(ceil_div(-1, 7), 0);
        assert_eq!(ceil_div(-7, 7), -1);
        assert_eq!(ceil_div(-10, 7), -1);
    }

    // ==========================================================================
    // Monthly projection
    // ==========================================================================
    #[test]
    fn test_monthly_day_ahead_stays_in_month() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 6, 11), PaySpan::Monthly, date(2024, 6, 27)).unwrap(),
            date(2024, 6, 27)
        );
    }

    #[test]
    fn test_monthly_same_day_moves_to_next_month() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 6, 27), PaySpan::Monthly, date(2024, 5, 27)).unwrap(),
            date(2024, 7, 27)
        );
    }

    #[test]
    fn test_monthly_day_passed_moves_to_next_month() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 6, 20), PaySpan::Monthly, date(2024, 1, 15)).unwrap(),
            date(2024, 7, 15)
        );
    }

    #[test]
    fn test_monthly_december_rolls_into_january() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 12, 20), PaySpan::Monthly, date(2024, 1, 15)).unwrap(),
            date(2025, 1, 15)
        );
    }

    #[test]
    fn test_monthly_day_31_clamps_to_february_leap_year() {
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 1, 31), PaySpan::Monthly, date(2023, 12, 31)).unwrap(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_monthly_day_30_clamps_to_february_common_year() {
        assert_eq!(
            next_pay_date_on_or_after(date(2023, 2, 5), PaySpan::Monthly, date(2023, 1, 30)).unwrap(),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn test_monthly_clamp_can_land_on_after() {
        // Day 31 is still "ahead" of Feb 29, but February ends on the 29th
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 2, 29), PaySpan::Monthly, date(2024, 1, 31)).unwrap(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_monthly_ignores_anchor_month() {
        let anchor_in_future = date(2030, 3, 5);
        assert_eq!(
            next_pay_date_on_or_after(date(2024, 6, 1), PaySpan::Monthly, anchor_in_future).unwrap(),
            date(2024, 6, 5)
        );
    }

    // ==========================================================================
    // Iterative generator
    // ==========================================================================
    #[test]
    fn test_pay_dates_after_weekly() {
        let dates = pay_dates_after(PaySpan::Weekly, date(2024, 5, 10), date(2024, 5, 11), 3);
        assert_eq!(dates, vec![date(2024, 5, 17), date(2024, 5, 24), date(2024, 5, 31)]);
    }

    #[test]
    fn test_pay_dates_after_excludes_exact_match() {
        let dates = pay_dates_after(PaySpan::BiWeekly, date(2024, 5, 10), date(2024, 5, 24), 1);
        assert_eq!(dates, vec![date(2024, 6, 7)]);
    }

    #[test]
    fn test_pay_dates_after_rewinds_future_anchor() {
        let dates = pay_dates_after(PaySpan::Weekly, date(2024, 6, 28), date(2024, 5, 1), 2);
        assert_eq!(dates, vec![date(2024, 5, 3), date(2024, 5, 10)]);
    }

    #[test]
    fn test_pay_dates_after_monthly_does_not_drift() {
        let dates = pay_dates_after(PaySpan::Monthly, date(2024, 1, 31), date(2024, 4, 1), 3);
        assert_eq!(dates, vec![date(2024, 4, 30), date(2024, 5, 31), date(2024, 6, 30)]);
    }

    #[test]
    fn test_pay_dates_after_zero_limit() {
        assert!(pay_dates_after(PaySpan::Weekly, date(2024, 5, 10), date(2024, 5, 11), 0).is_empty());
    }

    #[test]
    fn test_analytic_matches_iterative_for_a_year_of_dates() {
        let reference = date(2024, 5, 10);
        for offset in -200..200 {
            let after = add_days(date(2024, 5, 1), offset).unwrap();
            for span in [PaySpan::Weekly, PaySpan::BiWeekly, PaySpan::Monthly] {
                let iterative = pay_dates_after(span, reference, after, 1);
                assert_eq!(
                    next_pay_date_on_or_after(after, span, reference).unwrap(),
                    iterative[0],
                    "span {span} after {after}"
                );
            }
        }
    }

    // ==========================================================================
    // Calendar bounds
    // ==========================================================================
    #[test]
    fn test_periodic_projection_past_last_date_is_an_error() {
        let last = NaiveDate::MAX;
        let result = next_pay_date_on_or_after(last, PaySpan::Weekly, last);
        assert!(matches!(result, Err(EngineError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_monthly_projection_past_last_year_is_an_error() {
        let december = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 12, 1).unwrap();
        let result = next_pay_date_on_or_after(december, PaySpan::Monthly, date(2024, 1, 1));
        assert!(matches!(
            result,
            Err(EngineError::DateOutOfRange { date }) if date == december
        ));
    }

    #[test]
    fn test_monthly_projection_within_last_month_still_succeeds() {
        let december = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 12, 1).unwrap();
        let result = next_pay_date_on_or_after(december, PaySpan::Monthly, date(2024, 1, 15));
        assert_eq!(result.unwrap().day(), 15);
    }
}
