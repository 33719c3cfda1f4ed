//! Configuration types for due date calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::DEFAULT_MAX_ADJUSTMENT_STEPS;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySet, PublicHoliday};

/// The default number of days between funding and the earliest due date.
pub const DEFAULT_MIN_DUE_OFFSET_DAYS: i64 = 10;

fn default_min_due_offset_days() -> i64 {
    DEFAULT_MIN_DUE_OFFSET_DAYS
}

fn default_max_adjustment_steps() -> u32 {
    DEFAULT_MAX_ADJUSTMENT_STEPS
}

/// Tunable settings for the calculator, read from `calculator.yaml`.
///
/// Every field is optional in the file and falls back to its default.
///
/// # Example
///
/// ```
/// use due_date_engine::config::CalculatorSettings;
///
/// let settings = CalculatorSettings::default();
/// assert_eq!(settings.min_due_offset_days, 10);
/// assert_eq!(settings.max_adjustment_steps, 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CalculatorSettings {
    /// Days added to the funding date to get the minimum due date.
    #[serde(default = "default_min_due_offset_days")]
    pub min_due_offset_days: i64,
    /// Maximum days the weekend/holiday adjustment may step over.
    #[serde(default = "default_max_adjustment_steps")]
    pub max_adjustment_steps: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            min_due_offset_days: DEFAULT_MIN_DUE_OFFSET_DAYS,
            max_adjustment_steps: DEFAULT_MAX_ADJUSTMENT_STEPS,
        }
    }
}

impl CalculatorSettings {
    /// Checks that the settings can drive a calculation.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_due_offset_days < 0 {
            return Err(EngineError::InvalidConfig {
                field: "min_due_offset_days".to_string(),
                message: format!("must not be negative, got {}", self.min_due_offset_days),
            });
        }
        if self.max_adjustment_steps == 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_adjustment_steps".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Holiday calendar file structure (`holidays.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays in the calendar.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Returns the calendar's dates as a [`HolidaySet`].
    pub fn to_holiday_set(&self) -> HolidaySet {
        self.holidays.iter().collect()
    }
}
