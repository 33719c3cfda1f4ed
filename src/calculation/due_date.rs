//! Due date calculation.
//!
//! This module composes the minimum due date rule, the pay schedule
//! projection and the weekend/holiday adjustment into a single calculation.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::CalculatorSettings;
use crate::error::EngineResult;
use crate::models::{
    AdjustmentDirection, AuditStep, AuditTrace, AuditWarning, DueDateRequest, DueDateResult,
    HolidaySet, PaySpan,
};

use super::adjustment::adjust_for_weekends_and_holidays;
use super::calendar::{ToCalendarDate, add_days};
use super::pay_schedule::next_pay_date_on_or_after;

/// Computes loan repayment due dates.
///
/// The calculator holds only immutable settings, so one instance can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use due_date_engine::DueDateCalculator;
/// use due_date_engine::models::{DueDateRequest, HolidaySet, PaySpan};
/// use chrono::NaiveDate;
///
/// let calculator = DueDateCalculator::default();
/// let request = DueDateRequest {
///     fund_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     holidays: [NaiveDate::from_ymd_opt(2024, 6, 27).unwrap()].into_iter().collect(),
///     pay_span: PaySpan::Monthly,
///     reference_pay_date: NaiveDate::from_ymd_opt(2024, 6, 27).unwrap(),
///     has_direct_deposit: true,
/// };
///
/// let result = calculator.calculate(&request).unwrap();
/// assert_eq!(result.scheduled_pay_date, NaiveDate::from_ymd_opt(2024, 6, 27).unwrap());
/// assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateCalculator {
    settings: CalculatorSettings,
}

impl DueDateCalculator {
    /// Creates a calculator with the given settings.
    pub fn new(settings: CalculatorSettings) -> Self {
        Self { settings }
    }

    /// Returns the calculator's settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Returns the earliest date a due date may be scheduled for.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::DateOutOfRange`] when the offset
    /// runs past the calendar's bounds.
    pub fn min_due_date(&self, fund_date: NaiveDate) -> EngineResult<NaiveDate> {
        add_days(fund_date, self.settings.min_due_offset_days)
    }

    /// Computes the due date and the trail of decisions that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::NoBusinessDayReachable`] if the
    /// holiday set leaves no business day within the adjustment cap, or
    /// [`crate::error::EngineError::DateOutOfRange`] for dates at the very
    /// edge of the calendar.
    pub fn calculate(&self, request: &DueDateRequest) -> EngineResult<DueDateResult> {
        let start_time = Instant::now();
        let mut steps: Vec<AuditStep> = Vec::with_capacity(3);
        let mut warnings: Vec<AuditWarning> = Vec::new();

        let fund_date = request.fund_date;
        let min_due_date = self.min_due_date(fund_date)?;
        debug!(fund_date = %fund_date, min_due_date = %min_due_date, "Computed minimum due date");
        steps.push(AuditStep {
            step_number: 1,
            rule_id: "minimum_due_date".to_string(),
            rule_name: "Minimum Due Date".to_string(),
            input: json!({
                "fund_date": fund_date.to_string(),
                "offset_days": self.settings.min_due_offset_days,
            }),
            output: json!({ "min_due_date": min_due_date.to_string() }),
            reasoning: format!(
                "Due date must be at least {} days after funding on {}",
                self.settings.min_due_offset_days, fund_date
            ),
        });

        let scheduled_pay_date =
            next_pay_date_on_or_after(min_due_date, request.pay_span, request.reference_pay_date)?;
        debug!(
            pay_span = %request.pay_span,
            reference_pay_date = %request.reference_pay_date,
            scheduled_pay_date = %scheduled_pay_date,
            "Projected pay schedule"
        );
        steps.push(AuditStep {
            step_number: 2,
            rule_id: "pay_schedule_projection".to_string(),
            rule_name: "Pay Schedule Projection".to_string(),
            input: json!({
                "after": min_due_date.to_string(),
                "pay_span": request.pay_span.as_str(),
                "reference_pay_date": request.reference_pay_date.to_string(),
            }),
            output: json!({ "scheduled_pay_date": scheduled_pay_date.to_string() }),
            reasoning: projection_reasoning(request.pay_span, min_due_date, scheduled_pay_date),
        });

        let direction = request.adjustment_direction();
        let outcome = adjust_for_weekends_and_holidays(
            scheduled_pay_date,
            &request.holidays,
            direction,
            self.settings.max_adjustment_steps,
        )?;
        steps.push(AuditStep {
            step_number: 3,
            rule_id: "business_day_adjustment".to_string(),
            rule_name: "Business Day Adjustment".to_string(),
            input: json!({
                "date": scheduled_pay_date.to_string(),
                "direction": direction,
                "holiday_count": request.holidays.len(),
            }),
            output: json!({
                "due_date": outcome.date.to_string(),
                "skipped_days": outcome.skipped,
            }),
            reasoning: if outcome.skipped.is_empty() {
                format!("{} is a business day", scheduled_pay_date)
            } else {
                format!(
                    "Moved {} past {} non-business day(s) to {}",
                    direction,
                    outcome.skipped.len(),
                    outcome.date
                )
            },
        });

        if outcome.date < min_due_date {
            warn!(
                due_date = %outcome.date,
                min_due_date = %min_due_date,
                "Backward adjustment moved due date before minimum"
            );
            warnings.push(AuditWarning {
                code: "DUE_DATE_BEFORE_MINIMUM".to_string(),
                message: format!(
                    "Due date {} precedes the minimum due date {} because the pay date was moved {}",
                    outcome.date, min_due_date, AdjustmentDirection::Backward
                ),
                severity: "medium".to_string(),
            });
        }

        Ok(DueDateResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            fund_date,
            pay_span: request.pay_span,
            min_due_date,
            scheduled_pay_date,
            due_date: outcome.date,
            adjustment_direction: direction,
            skipped_days: outcome.skipped,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        })
    }
}

fn projection_reasoning(pay_span: PaySpan, after: NaiveDate, pay_date: NaiveDate) -> String {
    match pay_span.period_days() {
        Some(period) => format!(
            "First {} pay date ({}-day period) after {} is {}",
            pay_span, period, after, pay_date
        ),
        None => format!("First monthly pay date after {} is {}", after, pay_date),
    }
}

/// Calculates the first valid repayment due date for a loan.
///
/// Dates may carry a time-of-day; they are normalized to their UTC calendar
/// date first. The default settings apply: the due date is projected from
/// funding + 10 days, and non-business days are skipped forward with direct
/// deposit and backward without it.
///
/// # Preconditions
///
/// The holiday set plus weekends must leave a business day reachable from the
/// projected pay date; otherwise the calculation fails once the adjustment cap
/// is exceeded.
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidPaySpan`] if `pay_span` is not
///   `weekly`, `bi-weekly` or `monthly`
/// - [`crate::error::EngineError::NoBusinessDayReachable`] for degenerate
///   holiday sets
/// - [`crate::error::EngineError::DateOutOfRange`] when the projection runs
///   past the last representable date
///
/// # Example
///
/// ```
/// use due_date_engine::calculate_due_date;
/// use due_date_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays: HolidaySet = [
///     NaiveDate::from_ymd_opt(2024, 5, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// let due = calculate_due_date(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     &holidays,
///     "bi-weekly",
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     true,
/// )
/// .unwrap();
/// assert_eq!(due, NaiveDate::from_ymd_opt(2024, 5, 24).unwrap());
///
/// assert!(calculate_due_date(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     &holidays,
///     "quarterly",
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     true,
/// )
/// .is_err());
/// ```
pub fn calculate_due_date<F, R>(
    fund_date: F,
    holidays: &HolidaySet,
    pay_span: &str,
    reference_pay_date: R,
    has_direct_deposit: bool,
) -> EngineResult<NaiveDate>
where
    F: ToCalendarDate,
    R: ToCalendarDate,
{
    let request = DueDateRequest {
        fund_date: fund_date.to_calendar_date(),
        holidays: holidays.clone(),
        pay_span: pay_span.parse()?,
        reference_pay_date: reference_pay_date.to_calendar_date(),
        has_direct_deposit,
    };
    DueDateCalculator::default()
        .calculate(&request)
        .map(|result| result.due_date)
}
