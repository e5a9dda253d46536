//! Checklist report generation.
//!
//! Turns today's checklist into rows a presentation layer can display without
//! knowing about schedules or doses. All functions are framework-agnostic and
//! return structured data.

use crate::entities::{Medicine, Today};
use std::collections::BTreeMap;

/// Today's progress for one medicine on the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    /// Medicine name
    pub name: String,
    /// Unit label of a single dose
    pub unit: String,
    /// Amount in a single dose
    pub dose_size: u32,
    /// Doses due today according to the weekly schedule
    pub scheduled: u32,
    /// Doses taken so far today
    pub taken: i64,
    /// Doses still due today, never below zero
    pub remaining: i64,
    /// Doses left in supply
    pub inventory: i64,
    /// Whether the supply is at or below the low-supply threshold
    pub low_supply: bool,
}

impl ChecklistRow {
    /// Whether every scheduled dose has been taken.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Builds one row per checklist entry, in name order.
///
/// Checklist entries without a stored medicine are skipped; the store never
/// produces them, but a hand-edited document restored on the same day can.
#[must_use]
pub fn checklist_rows(
    medicines: &BTreeMap<String, Medicine>,
    today: &Today,
    low_supply_threshold: i64,
) -> Vec<ChecklistRow> {
    today
        .checklist()
        .iter()
        .filter_map(|(name, taken)| {
            let medicine = medicines.get(name)?;
            let scheduled = medicine.doses_on(today.day());
            Some(ChecklistRow {
                name: name.clone(),
                unit: medicine.dose.unit.clone(),
                dose_size: medicine.dose.size,
                scheduled,
                taken: *taken,
                remaining: (i64::from(scheduled) - taken).max(0),
                inventory: medicine.dose.inventory,
                low_supply: medicine.dose.inventory <= low_supply_threshold,
            })
        })
        .collect()
}

/// Fraction of today's scheduled doses already taken, from 0 to 100.
#[must_use]
pub fn completion_percent(rows: &[ChecklistRow]) -> f64 {
    let scheduled: i64 = rows.iter().map(|row| i64::from(row.scheduled)).sum();
    if scheduled == 0 {
        return 100.0;
    }
    let taken: i64 = rows
        .iter()
        .map(|row| row.taken.clamp(0, i64::from(row.scheduled)))
        .sum();
    (taken as f64 / scheduled as f64) * 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{medicine_map, scheduled_medicine};

    #[test]
    fn test_checklist_rows() {
        let mut low = scheduled_medicine("Low", [2; 7]);
        low.dose.inventory = 2;
        let medicines = medicine_map(vec![low, scheduled_medicine("Plenty", [1; 7])]);

        let mut today = Today::new(3);
        today.add("Low", 3);
        today.add("Plenty", 0);
        today.add("Orphan", 1);

        let rows = checklist_rows(&medicines, &today, 3);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Low");
        assert_eq!(rows[0].scheduled, 2);
        assert_eq!(rows[0].remaining, 0);
        assert!(rows[0].is_complete());
        assert!(rows[0].low_supply);

        assert_eq!(rows[1].name, "Plenty");
        assert_eq!(rows[1].remaining, 1);
        assert!(!rows[1].low_supply);
    }

    #[test]
    fn test_completion_percent() {
        let medicines = medicine_map(vec![
            scheduled_medicine("Twice", [2; 7]),
            scheduled_medicine("Once", [2; 7]),
        ]);
        let mut today = Today::new(0);
        today.add("Twice", 2);
        today.add("Once", 1);

        let rows = checklist_rows(&medicines, &today, 0);
        assert_eq!(completion_percent(&rows), 75.0);
        assert_eq!(completion_percent(&[]), 100.0);
    }
}
