//! Medicine construction from raw field values.
//!
//! Both the document loader and interactive callers build medicines here so the
//! field-to-entity mapping lives in one place. No semantic checks are made;
//! callers are responsible for passing well-formed values.

use crate::entities::{Dose, Medicine, WeeklySchedule};

/// Builds `Medicine`/`Dose` pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedicineFactory;

impl MedicineFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Wraps a new `Dose` built from the size, inventory, and unit fields into a
    /// `Medicine` carrying the identity and schedule fields.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn create_medicine(
        &self,
        name: String,
        dose_size: u32,
        dose_inventory: i64,
        dose_unit: String,
        weekly_schedule: WeeklySchedule,
        description: String,
        id: String,
    ) -> Medicine {
        Medicine {
            id,
            name,
            description,
            weekly_schedule,
            dose: Dose::new(dose_size, dose_inventory, dose_unit),
        }
    }
}
