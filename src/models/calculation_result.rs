//! Calculation result models for the Due Date Engine.
//!
//! This module contains the [`DueDateResult`] type and its associated structures
//! that capture all outputs from a due date calculation, including the
//! intermediate dates, the days skipped during adjustment and an audit trace.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PaySpan;

/// The direction a non-business pay date is moved in.
///
/// Borrowers with direct deposit have funds available on the pay date or
/// later, so the date moves forward. Without direct deposit the repayment has
/// to be collected on the preceding business day.
///
/// # Example
///
/// ```
/// use due_date_engine::models::AdjustmentDirection;
///
/// assert_eq!(AdjustmentDirection::from_direct_deposit(true), AdjustmentDirection::Forward);
/// assert_eq!(AdjustmentDirection::Backward.step_days(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    /// Move to later days.
    Forward,
    /// Move to earlier days.
    Backward,
}

impl AdjustmentDirection {
    /// Picks the direction for the given deposit method.
    pub fn from_direct_deposit(has_direct_deposit: bool) -> Self {
        if has_direct_deposit {
            AdjustmentDirection::Forward
        } else {
            AdjustmentDirection::Backward
        }
    }

    /// Returns the signed number of days one step moves.
    pub fn step_days(&self) -> i64 {
        match self {
            AdjustmentDirection::Forward => 1,
            AdjustmentDirection::Backward => -1,
        }
    }
}

impl fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentDirection::Forward => write!(f, "forward"),
            AdjustmentDirection::Backward => write!(f, "backward"),
        }
    }
}

/// Why a day was stepped over during adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Saturday or Sunday.
    Weekend,
    /// Listed in the holiday set.
    Holiday,
}

/// A non-business day stepped over while adjusting the pay date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDay {
    /// The date that was skipped.
    pub date: NaiveDate,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate outcomes that are valid but may surprise a reader,
/// such as a due date that precedes the minimum due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use due_date_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a due date calculation.
///
/// `due_date` is the value callers act on; the other dates explain how it
/// was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The normalized funding date.
    pub fund_date: NaiveDate,
    /// The pay span the schedule was projected with.
    pub pay_span: PaySpan,
    /// The earliest date a due date may be scheduled for before adjustment.
    pub min_due_date: NaiveDate,
    /// The pay date projected from the schedule, before adjustment.
    pub scheduled_pay_date: NaiveDate,
    /// The final due date: a business day.
    pub due_date: NaiveDate,
    /// The direction used for weekend/holiday adjustment.
    pub adjustment_direction: AdjustmentDirection,
    /// Days stepped over, in the order they were visited.
    pub skipped_days: Vec<SkippedDay>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl DueDateResult {
    /// Returns `true` if the due date differs from the scheduled pay date.
    pub fn was_adjusted(&self) -> bool {
        self.due_date != self.scheduled_pay_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_sample_result(scheduled: NaiveDate, due: NaiveDate) -> DueDateResult {
        DueDateResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            fund_date: date(2024, 6, 1),
            pay_span: PaySpan::Monthly,
            min_due_date: date(2024, 6, 11),
            scheduled_pay_date: scheduled,
            due_date: due,
            adjustment_direction: AdjustmentDirection::Forward,
            skipped_days: vec![],
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        }
    }

    #[test]
    fn test_direction_from_direct_deposit() {
        assert_eq!(
            AdjustmentDirection::from_direct_deposit(true),
            AdjustmentDirection::Forward
        );
        assert_eq!(
            AdjustmentDirection::from_direct_deposit(false),
            AdjustmentDirection::Backward
        );
    }

    #[test]
    fn test_direction_step_days() {
        assert_eq!(AdjustmentDirection::Forward.step_days(), 1);
        assert_eq!(AdjustmentDirection::Backward.step_days(), -1);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(AdjustmentDirection::Forward.to_string(), "forward");
        assert_eq!(AdjustmentDirection::Backward.to_string(), "backward");
    }

    #[test]
    fn test_was_adjusted() {
        assert!(create_sample_result(date(2024, 6, 27), date(2024, 6, 28)).was_adjusted());
        assert!(!create_sample_result(date(2024, 6, 27), date(2024, 6, 27)).was_adjusted());
    }

    #[test]
    fn test_skipped_day_serialization() {
        let skipped = SkippedDay {
            date: date(2024, 5, 25),
            reason: SkipReason::Weekend,
        };
        let json = serde_json::to_string(&skipped).unwrap();
        assert_eq!(json, r#"{"date":"2024-05-25","reason":"weekend"}"#);
    }

    #[test]
    fn test_result_serialization() {
        let mut result = create_sample_result(date(2024, 6, 27), date(2024, 6, 28));
        result.skipped_days.push(SkippedDay {
            date: date(2024, 6, 27),
            reason: SkipReason::Holiday,
        });

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"due_date\":\"2024-06-28\""));
        assert!(json.contains("\"pay_span\":\"monthly\""));
        assert!(json.contains("\"adjustment_direction\":\"forward\""));
        assert!(json.contains("\"reason\":\"holiday\""));

        let back: DueDateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
