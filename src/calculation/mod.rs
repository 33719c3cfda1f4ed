//! Calculation logic for the Due Date Engine.
//!
//! This module contains the calendar helpers, the pay schedule projection,
//! the weekend/holiday adjustment and the calculator that composes them.

mod adjustment;
mod calendar;
mod due_date;
mod pay_schedule;

pub use adjustment::{
    AdjustmentOutcome, DEFAULT_MAX_ADJUSTMENT_STEPS, adjust_for_weekends_and_holidays,
};
pub use calendar::{
    ToCalendarDate, add_days, is_business_day, is_holiday, is_weekend, non_business_reason,
    normalize,
};
pub use due_date::{DueDateCalculator, calculate_due_date};
pub use pay_schedule::{next_pay_date_on_or_after, pay_dates_after};
