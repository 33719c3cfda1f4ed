//! Configuration loading and management for the Due Date Engine.
//!
//! This module provides functionality to load calculator settings and the
//! holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use due_date_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Minimum offset: {} days", config.settings().min_due_offset_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorSettings, DEFAULT_MIN_DUE_OFFSET_DAYS, HolidayCalendar};
