//! Holiday models.
//!
//! This module contains the [`PublicHoliday`] record loaded from holiday
//! calendars and the [`HolidaySet`] used by the calculator for membership tests.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday on which no repayment can be collected.
///
/// # Example
///
/// ```
/// use due_date_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 5, 27).unwrap(),
///     name: "Memorial Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    #[serde(default)]
    pub name: String,
}

/// A set of holiday dates.
///
/// Membership is tested by calendar-date equality, so the order and
/// duplication of the source list do not matter.
///
/// # Example
///
/// ```
/// use due_date_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays: HolidaySet = [
///     NaiveDate::from_ymd_opt(2024, 5, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()));
/// assert!(!holidays.contains(NaiveDate::from_ymd_opt(2024, 7, 5).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns a new set holding the dates of both sets.
    pub fn union(&self, other: &HolidaySet) -> HolidaySet {
        HolidaySet {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a PublicHoliday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = &'a PublicHoliday>>(iter: I) -> Self {
        iter.into_iter().map(|h| h.date).collect()
    }
}
