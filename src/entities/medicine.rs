//! Medicine entity - Identity, weekly schedule, and supply of one medicine.
//!
//! The name is the key a store files the medicine under; the id is the key
//! used by external drug-information lookups.

use super::{dose::Dose, schedule::WeeklySchedule};
use serde::{Deserialize, Serialize};

/// A medicine the user takes on a weekly schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// External lookup identifier
    pub id: String,
    /// Unique display name, also the store key
    pub name: String,
    /// Free-text notes
    pub description: String,
    /// Doses due per day of the week
    pub weekly_schedule: WeeklySchedule,
    /// Owned supply and dose size
    pub dose: Dose,
}

impl Medicine {
    /// Whether any doses are due on the given day index.
    #[must_use]
    pub fn is_scheduled_on(&self, day: usize) -> bool {
        self.weekly_schedule.is_scheduled_on(day)
    }

    #[must_use]
    pub fn doses_on(&self, day: usize) -> u32 {
        self.weekly_schedule.doses_on(day)
    }
}
