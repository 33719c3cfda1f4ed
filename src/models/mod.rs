//! Core data models for the Due Date Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod due_date_request;
mod holiday;
mod pay_span;

pub use calculation_result::{
    AdjustmentDirection, AuditStep, AuditTrace, AuditWarning, DueDateResult, SkipReason,
    SkippedDay,
};
pub use due_date_request::DueDateRequest;
pub use holiday::{HolidaySet, PublicHoliday};
pub use pay_span::PaySpan;
