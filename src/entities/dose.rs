//! Dose entity - The on-hand supply of a single medicine.
//!
//! Inventory is plain integer bookkeeping: taking a dose draws it down by one
//! and undoing a take puts it back. No bound is enforced in either direction,
//! so a supply that has run out goes negative rather than refusing the take.

use serde::{Deserialize, Serialize};

/// Amount per dose and number of doses left for one medicine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dose {
    /// Amount in a single dose, in `unit`s
    pub size: u32,
    /// Free-text unit label (e.g. "mg", "tablet")
    pub unit: String,
    /// Doses remaining
    pub inventory: i64,
}

impl Dose {
    #[must_use]
    pub const fn new(size: u32, inventory: i64, unit: String) -> Self {
        Self {
            size,
            unit,
            inventory,
        }
    }

    pub const fn take_dose(&mut self) {
        self.inventory -= 1;
    }

    pub const fn undo_take_dose(&mut self) {
        self.inventory += 1;
    }
}
