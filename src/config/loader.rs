//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! settings and holiday calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::DueDateCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySet, PublicHoliday};

use super::types::{CalculatorSettings, HolidayCalendar};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calculator.yaml   # min_due_offset_days, max_adjustment_steps
/// └── holidays.yaml     # holidays: [{date, name}]
/// ```
///
/// # Example
///
/// ```no_run
/// use due_date_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let calculator = loader.calculator();
/// println!("Holidays loaded: {}", loader.holidays().len());
/// # let _ = calculator;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: CalculatorSettings,
    calendar: Vec<PublicHoliday>,
    holidays: HolidaySet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The settings fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalculatorSettings>(&path.join("calculator.yaml"))?;
        let calendar = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;

        let loader = Self::from_parts(settings, calendar)?;
        info!(
            path = %path.display(),
            min_due_offset_days = loader.settings.min_due_offset_days,
            max_adjustment_steps = loader.settings.max_adjustment_steps,
            holidays = loader.holidays.len(),
            "Loaded due date configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from already-parsed configuration.
    pub fn from_parts(settings: CalculatorSettings, calendar: HolidayCalendar) -> EngineResult<Self> {
        settings.validate()?;
        let holidays = calendar.to_holiday_set();
        Ok(Self {
            settings,
            calendar: calendar.holidays,
            holidays,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Returns the configured holiday dates.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns the configured holidays with their names.
    pub fn calendar(&self) -> &[PublicHoliday] {
        &self.calendar
    }

    /// Returns a calculator using the configured settings.
    pub fn calculator(&self) -> DueDateCalculator {
        DueDateCalculator::new(self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/default")
    }

    /// Creates a scratch directory with the given files.
    fn scratch_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "due_date_engine_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_default_config() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.settings().min_due_offset_days, 10);
        assert_eq!(loader.settings().max_adjustment_steps, 366);
        assert!(
            loader
                .holidays()
                .contains(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap())
        );
        assert!(loader.calendar().iter().any(|h| h.name == "Independence Day"));
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/path/config");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("calculator.yaml"));
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_holidays_file_returns_config_not_found() {
        let dir = scratch_dir("missing_holidays", &[("calculator.yaml", "min_due_offset_days: 10\n")]);
        let result = ConfigLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { ref path }) if path.ends_with("holidays.yaml")
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir(
            "invalid_yaml",
            &[
                ("calculator.yaml", "min_due_offset_days: [not a number\n"),
                ("holidays.yaml", "holidays: []\n"),
            ],
        );
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let dir = scratch_dir(
            "invalid_settings",
            &[
                ("calculator.yaml", "max_adjustment_steps: 0\n"),
                ("holidays.yaml", "holidays: []\n"),
            ],
        );
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_loader_has_no_holidays() {
        let loader = ConfigLoader::default();
        assert!(loader.holidays().is_empty());
        assert_eq!(loader.calculator().settings().min_due_offset_days, 10);
    }
}
