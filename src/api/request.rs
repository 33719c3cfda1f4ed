//! Request types for the Due Date Engine API.
//!
//! This module defines the JSON request structure for the `/due-date` endpoint.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::ToCalendarDate;
use crate::error::EngineResult;
use crate::models::{DueDateRequest, HolidaySet};

/// A date as accepted over the wire.
///
/// Plain `YYYY-MM-DD` dates are used as-is. Date-times, with or without an
/// offset, are normalized to their UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// A calendar date such as `2024-05-01`.
    Date(NaiveDate),
    /// A date-time with an offset such as `2024-05-01T09:30:00-04:00`.
    Zoned(DateTime<FixedOffset>),
    /// A date-time without an offset, taken as UTC.
    Naive(NaiveDateTime),
}

impl ToCalendarDate for DateInput {
    fn to_calendar_date(&self) -> NaiveDate {
        match self {
            DateInput::Date(date) => date.to_calendar_date(),
            DateInput::Zoned(datetime) => datetime.to_calendar_date(),
            DateInput::Naive(datetime) => datetime.to_calendar_date(),
        }
    }
}

fn default_include_configured_holidays() -> bool {
    true
}

/// Request body for the `/due-date` endpoint.
///
/// `pay_span` is kept as a string so that unrecognized values are reported as
/// `INVALID_PAY_SPAN` rather than as a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The date the loan was funded.
    pub fund_date: DateInput,
    /// The pay interval: `weekly`, `bi-weekly` or `monthly`.
    pub pay_span: String,
    /// A known pay date on the borrower's schedule.
    pub reference_pay_date: DateInput,
    /// Whether the borrower is paid by direct deposit.
    pub has_direct_deposit: bool,
    /// Holidays to avoid in addition to the configured calendar.
    #[serde(default)]
    pub holidays: Vec<DateInput>,
    /// Whether to merge the server's holiday calendar into `holidays`.
    #[serde(default = "default_include_configured_holidays")]
    pub include_configured_holidays: bool,
}

impl CalculationRequest {
    /// Converts the wire request into a domain request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidPaySpan`] for an
    /// unrecognized pay span.
    pub fn into_domain(self, configured_holidays: &HolidaySet) -> EngineResult<DueDateRequest> {
        let pay_span = self.pay_span.parse()?;

        let requested: HolidaySet = self
            .holidays
            .iter()
            .map(|holiday| holiday.to_calendar_date())
            .collect();
        let holidays = if self.include_configured_holidays {
            requested.union(configured_holidays)
        } else {
            requested
        };

        Ok(DueDateRequest {
            fund_date: self.fund_date.to_calendar_date(),
            holidays,
            pay_span,
            reference_pay_date: self.reference_pay_date.to_calendar_date(),
            has_direct_deposit: self.has_direct_deposit,
        })
    }
}
