//! Error types for the Due Date Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a due date.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::AdjustmentDirection;

/// The main error type for the Due Date Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use due_date_engine::error::EngineError;
///
/// let error = EngineError::InvalidPaySpan {
///     value: "quarterly".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid paySpan: quarterly");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pay span is not one of `weekly`, `bi-weekly` or `monthly`.
    #[error("Invalid paySpan: {value}")]
    InvalidPaySpan {
        /// The offending pay span value.
        value: String,
    },

    /// Weekend/holiday adjustment stepped past its cap without finding a business day.
    #[error(
        "No business day reachable from {start} moving {direction} within {max_steps} days"
    )]
    NoBusinessDayReachable {
        /// The date the adjustment started from.
        start: NaiveDate,
        /// The direction the adjustment was moving in.
        direction: AdjustmentDirection,
        /// The number of days stepped before giving up.
        max_steps: u32,
    },

    /// Date arithmetic left the range of representable calendar dates.
    #[error("Date arithmetic from {date} falls outside the supported calendar range")]
    DateOutOfRange {
        /// The date the arithmetic started from.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the calculator cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
