//! Day-rollover reconciliation
//!
//! Decides, when a store is opened, whether the persisted checklist still
//! belongs to the current day. A checklist written earlier the same weekday is
//! restored as-is so partial progress survives a restart. A checklist written
//! on any other day is discarded and a fresh one is derived from each
//! medicine's weekly schedule, with every taken count at zero.

use super::document::TodayRecord;
use crate::entities::{DAY_LABELS, Medicine, Today};
use std::collections::BTreeMap;

/// What reconciliation did with the persisted checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing was persisted yet; the checklist starts empty.
    Fresh { day: usize },
    /// The persisted checklist was for today and was restored verbatim.
    Restored { day: usize, entries: usize },
    /// The persisted checklist was for another day and was rebuilt.
    RolledOver {
        /// Day index found in the document
        from_day: i64,
        to_day: usize,
        /// Number of persisted entries thrown away
        discarded: usize,
        /// Medicines scheduled for the new day, in name order
        scheduled: Vec<String>,
    },
}

/// Builds the checklist for `day` from the medicines and the persisted
/// checklist, if any.
#[must_use]
pub fn reconcile(
    medicines: &BTreeMap<String, Medicine>,
    day: usize,
    persisted: Option<&TodayRecord>,
) -> (Today, Reconciliation) {
    let mut today = Today::new(day);

    let Some(record) = persisted else {
        return (today, Reconciliation::Fresh { day });
    };

    if usize::try_from(record.day_int).is_ok_and(|stored| stored == day) {
        for entry in &record.today_array {
            today.add(&entry.name, entry.taken);
        }
        let entries = today.checklist().len();
        return (today, Reconciliation::Restored { day, entries });
    }

    let scheduled: Vec<String> = medicines
        .values()
        .filter(|medicine| medicine.is_scheduled_on(day))
        .map(|medicine| medicine.name.clone())
        .collect();
    for name in &scheduled {
        today.add(name, 0);
    }

    (
        today,
        Reconciliation::RolledOver {
            from_day: record.day_int,
            to_day: day,
            discarded: record.today_array.len(),
            scheduled,
        },
    )
}

fn day_label(day: usize) -> &'static str {
    DAY_LABELS.get(day).copied().unwrap_or("?")
}

/// Formats a reconciliation into a one-line summary for logging.
#[must_use]
pub fn format_reconciliation_summary(reconciliation: &Reconciliation) -> String {
    match reconciliation {
        Reconciliation::Fresh { day } => {
            format!("New medicine document - checklist for {} starts empty", day_label(*day))
        }
        Reconciliation::Restored { day, entries } => {
            format!("Restored {entries} checklist entries for {}", day_label(*day))
        }
        Reconciliation::RolledOver {
            from_day,
            to_day,
            discarded,
            scheduled,
        } => {
            let from = usize::try_from(*from_day).map_or("?", day_label);
            format!(
                "Day rollover {from} → {} - discarded {discarded} entries, {} scheduled: {}",
                day_label(*to_day),
                scheduled.len(),
                if scheduled.is_empty() {
                    "none".to_string()
                } else {
                    scheduled.join(", ")
                }
            )
        }
    }
}
