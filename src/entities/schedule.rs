//! Weekly schedule - how many doses of a medicine are due on each day of the week.
//!
//! Days are indexed from 0 (Sunday) to 6 (Saturday), matching the order of the
//! `sun`..`sat` fields in the persisted document.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Number of slots in a weekly schedule.
pub const DAYS_IN_WEEK: usize = 7;

/// Short day labels, indexed like the schedule.
pub const DAY_LABELS: [&str; DAYS_IN_WEEK] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Returns the schedule index (Sunday = 0 … Saturday = 6) for a weekday.
#[must_use]
pub fn day_index_of_weekday(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// Returns the schedule index of the day of the week `date` falls on.
#[must_use]
pub fn day_index_of(date: NaiveDate) -> usize {
    day_index_of_weekday(date.weekday())
}

/// Doses scheduled per day of the week; 0 means not scheduled that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklySchedule([u32; DAYS_IN_WEEK]);

impl WeeklySchedule {
    #[must_use]
    pub const fn new(doses: [u32; DAYS_IN_WEEK]) -> Self {
        Self(doses)
    }

    /// Doses due on `day`. Indexes past Saturday have nothing scheduled.
    #[must_use]
    pub fn doses_on(&self, day: usize) -> u32 {
        self.0.get(day).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_scheduled_on(&self, day: usize) -> bool {
        self.doses_on(day) != 0
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u32; DAYS_IN_WEEK] {
        &self.0
    }
}

impl From<[u32; DAYS_IN_WEEK]> for WeeklySchedule {
    fn from(doses: [u32; DAYS_IN_WEEK]) -> Self {
        Self(doses)
    }
}

/// Parses the comma form `sun,mon,tue,wed,thu,fri,sat`, e.g. `0,1,1,1,1,1,0`.
impl FromStr for WeeklySchedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != DAYS_IN_WEEK {
            return Err(Error::InvalidSchedule {
                message: format!(
                    "expected {DAYS_IN_WEEK} comma-separated values, got {}",
                    parts.len()
                ),
            });
        }

        let mut doses = [0_u32; DAYS_IN_WEEK];
        for (slot, (part, label)) in doses.iter_mut().zip(parts.iter().zip(DAY_LABELS)) {
            *slot = part.parse().map_err(|e| Error::InvalidSchedule {
                message: format!("{label}: '{part}' is not a dose count ({e})"),
            })?;
        }
        Ok(Self(doses))
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
