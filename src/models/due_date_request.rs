//! Due date request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AdjustmentDirection, HolidaySet, PaySpan};

/// Everything the calculator needs to compute a due date.
///
/// # Example
///
/// ```
/// use due_date_engine::models::{DueDateRequest, HolidaySet, PaySpan};
/// use chrono::NaiveDate;
///
/// let request = DueDateRequest {
///     fund_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     holidays: HolidaySet::new(),
///     pay_span: PaySpan::BiWeekly,
///     reference_pay_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     has_direct_deposit: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateRequest {
    /// The date the loan was disbursed.
    pub fund_date: NaiveDate,
    /// Dates on which no repayment can be collected.
    #[serde(default)]
    pub holidays: HolidaySet,
    /// The borrower's pay interval.
    pub pay_span: PaySpan,
    /// A known date on the borrower's pay schedule.
    pub reference_pay_date: NaiveDate,
    /// Whether the borrower is paid by direct deposit.
    pub has_direct_deposit: bool,
}

impl DueDateRequest {
    /// Returns the direction non-business pay dates are moved in.
    pub fn adjustment_direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::from_direct_deposit(self.has_direct_deposit)
    }
}
