//! Pay span model.
//!
//! A [`PaySpan`] names the recurring interval of a borrower's pay schedule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The recurring interval of a pay schedule.
///
/// Only three spans are recognized. Parsing any other value fails with
/// [`EngineError::InvalidPaySpan`].
///
/// # Example
///
/// ```
/// use due_date_engine::models::PaySpan;
///
/// let span: PaySpan = "bi-weekly".parse().unwrap();
/// assert_eq!(span, PaySpan::BiWeekly);
/// assert_eq!(span.period_days(), Some(14));
/// assert!("quarterly".parse::<PaySpan>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaySpan {
    /// Paid every 7 days.
    #[serde(rename = "weekly")]
    Weekly,
    /// Paid every 14 days.
    #[serde(rename = "bi-weekly")]
    BiWeekly,
    /// Paid on the same day of every month.
    #[serde(rename = "monthly")]
    Monthly,
}

impl PaySpan {
    /// Returns the wire name of the span.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaySpan::Weekly => "weekly",
            PaySpan::BiWeekly => "bi-weekly",
            PaySpan::Monthly => "monthly",
        }
    }

    /// Returns the fixed period in days, or `None` for calendar-month spans.
    pub fn period_days(&self) -> Option<i64> {
        match self {
            PaySpan::Weekly => Some(7),
            PaySpan::BiWeekly => Some(14),
            PaySpan::Monthly => None,
        }
    }
}

impl fmt::Display for PaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaySpan {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(PaySpan::Weekly),
            "bi-weekly" => Ok(PaySpan::BiWeekly),
            "monthly" => Ok(PaySpan::Monthly),
            other => Err(EngineError::InvalidPaySpan {
                value: other.to_string(),
            }),
        }
    }
}
