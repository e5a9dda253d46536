//! The persisted JSON document and its mapping to entities.
//!
//! The document holds the checklist for the day it was written on and every
//! medicine the user tracks:
//!
//! ```json
//! {
//!   "today": { "dayInt": 1, "todayArray": [ { "name": "Aspirin", "taken": 1 } ] },
//!   "medicines": [
//!     { "name": "Aspirin", "doseSize": 81, "doseInventory": 29, "doseUnit": "mg",
//!       "sun": 1, "mon": 1, "tue": 1, "wed": 1, "thu": 1, "fri": 1, "sat": 1,
//!       "description": "", "id": "1191" }
//!   ]
//! }
//! ```
//!
//! Medicine record fields are declared in document order so that writing the
//! same state twice produces the same bytes.

use super::factory::MedicineFactory;
use crate::{
    entities::{Medicine, Today, WeeklySchedule},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub today: TodayRecord,
    pub medicines: Vec<MedicineRecord>,
}

/// The checklist as of the last write, tagged with the day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayRecord {
    /// Day index (Sunday = 0) the checklist was written on. Kept signed so a
    /// hand-edited out-of-range value reads as a stale day instead of failing.
    pub day_int: i64,
    pub today_array: Vec<ChecklistRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRecord {
    pub name: String,
    pub taken: i64,
}

/// One medicine, flattened with its dose and per-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    pub name: String,
    pub dose_size: u32,
    pub dose_inventory: i64,
    pub dose_unit: String,
    pub sun: u32,
    pub mon: u32,
    pub tue: u32,
    pub wed: u32,
    pub thu: u32,
    pub fri: u32,
    pub sat: u32,
    pub description: String,
    pub id: String,
}

impl MedicineRecord {
    #[must_use]
    pub const fn weekly_schedule(&self) -> WeeklySchedule {
        WeeklySchedule::new([
            self.sun, self.mon, self.tue, self.wed, self.thu, self.fri, self.sat,
        ])
    }

    /// Builds the entity through the factory.
    #[must_use]
    pub fn into_medicine(self, factory: &MedicineFactory) -> Medicine {
        let weekly_schedule = self.weekly_schedule();
        factory.create_medicine(
            self.name,
            self.dose_size,
            self.dose_inventory,
            self.dose_unit,
            weekly_schedule,
            self.description,
            self.id,
        )
    }
}

impl From<&Medicine> for MedicineRecord {
    fn from(medicine: &Medicine) -> Self {
        let [sun, mon, tue, wed, thu, fri, sat] = *medicine.weekly_schedule.as_array();
        Self {
            name: medicine.name.clone(),
            dose_size: medicine.dose.size,
            dose_inventory: medicine.dose.inventory,
            dose_unit: medicine.dose.unit.clone(),
            sun,
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            description: medicine.description.clone(),
            id: medicine.id.clone(),
        }
    }
}

impl StoreDocument {
    /// Snapshots the in-memory state. Medicines are written in name order.
    #[must_use]
    pub fn from_state(medicines: &BTreeMap<String, Medicine>, today: &Today) -> Self {
        Self {
            today: TodayRecord {
                day_int: i64::try_from(today.day()).unwrap_or(i64::MAX),
                today_array: today
                    .checklist()
                    .iter()
                    .map(|(name, taken)| ChecklistRecord {
                        name: name.clone(),
                        taken: *taken,
                    })
                    .collect(),
            },
            medicines: medicines.values().map(MedicineRecord::from).collect(),
        }
    }

    /// Rebuilds the medicine map. A later record with a duplicate name
    /// replaces the earlier one.
    #[must_use]
    pub fn build_medicines(&self, factory: &MedicineFactory) -> BTreeMap<String, Medicine> {
        self.medicines
            .iter()
            .cloned()
            .map(|record| {
                let medicine = record.into_medicine(factory);
                (medicine.name.clone(), medicine)
            })
            .collect()
    }
}

/// Parses a persisted document.
pub fn decode(contents: &str) -> Result<StoreDocument> {
    serde_json::from_str(contents).map_err(|e| Error::MalformedDocument {
        message: e.to_string(),
    })
}

/// Serializes a document for storage.
pub fn encode(document: &StoreDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| Error::MalformedDocument {
        message: format!("Failed to serialize document: {e}"),
    })
}
