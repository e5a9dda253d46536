//! Medicine store - The single source of truth for medicines and today's checklist.
//!
//! A store is opened once per process for the current date. Opening reads the
//! persisted document, rebuilds the medicines, and reconciles the checklist
//! against the current day. Every mutation afterwards writes the full document
//! back through the storage backend before returning.
//!
//! Mutations are all-or-nothing. Lookups are checked before anything changes,
//! and if the write-through fails the in-memory state is put back the way it was,
//! so the store never disagrees with the last document it managed to write.

use super::{
    document::{self, StoreDocument},
    factory::MedicineFactory,
    reconcile::{Reconciliation, format_reconciliation_summary, reconcile},
    report::{ChecklistRow, checklist_rows},
    storage::DocumentStorage,
};
use crate::{
    entities::{DAYS_IN_WEEK, Medicine, Today, day_index_of},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Owns every tracked medicine and the checklist for the current day.
#[derive(Debug)]
pub struct MedicineStore<S: DocumentStorage> {
    storage: S,
    factory: MedicineFactory,
    medicines: BTreeMap<String, Medicine>,
    today: Today,
    reconciliation: Reconciliation,
}

impl<S: DocumentStorage> MedicineStore<S> {
    /// Opens the store for the day of the week `date` falls on.
    pub fn open(storage: S, date: NaiveDate) -> Result<Self> {
        Self::open_on_day(storage, day_index_of(date))
    }

    /// Opens the store for a day index (Sunday = 0 … Saturday = 6).
    ///
    /// An absent or empty document starts an empty store and is written
    /// immediately. A document that cannot be read or parsed fails the open.
    #[instrument(skip(storage), fields(location = %storage.location()))]
    pub fn open_on_day(storage: S, day: usize) -> Result<Self> {
        if day >= DAYS_IN_WEEK {
            return Err(Error::InvalidDay { day });
        }

        let factory = MedicineFactory::new();
        let persisted = storage.read()?.map(|c| document::decode(&c)).transpose()?;

        let medicines = persisted
            .as_ref()
            .map(|doc| doc.build_medicines(&factory))
            .unwrap_or_default();
        let (today, reconciliation) =
            reconcile(&medicines, day, persisted.as_ref().map(|doc| &doc.today));
        info!("{}", format_reconciliation_summary(&reconciliation));

        let mut store = Self {
            storage,
            factory,
            medicines,
            today,
            reconciliation,
        };
        if persisted.is_none() {
            store.persist()?;
        }

        info!(
            "Medicine store ready with {} medicines, {} on today's checklist",
            store.medicines.len(),
            store.today.checklist().len()
        );
        Ok(store)
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.medicines.contains_key(name)
    }

    /// Adds or replaces a medicine by name.
    ///
    /// A medicine due today gets a checklist entry with nothing taken. Saving
    /// over an existing name on the same day therefore resets its taken count.
    #[instrument(skip(self, medicine), fields(name = %medicine.name))]
    pub fn save_medicine(&mut self, medicine: Medicine) -> Result<()> {
        self.mutate(|medicines, today| {
            if medicine.is_scheduled_on(today.day()) {
                today.add(&medicine.name, 0);
            } else {
                today.remove(&medicine.name);
            }
            medicines.insert(medicine.name.clone(), medicine);
            Ok(())
        })
    }

    /// Removes a medicine and its checklist entry. Removing an unknown name is a no-op.
    #[instrument(skip(self))]
    pub fn remove_medicine(&mut self, name: &str) -> Result<()> {
        self.mutate(|medicines, today| {
            if medicines.remove(name).is_none() {
                debug!("Nothing stored under '{}'", name);
            }
            today.remove(name);
            Ok(())
        })
    }

    /// Records one dose taken: draws down the supply and ticks the checklist.
    #[instrument(skip(self))]
    pub fn take_medicine(&mut self, name: &str) -> Result<()> {
        self.mutate(|medicines, today| {
            let medicine = checked_entry(medicines, today, name)?;
            today.take(name)?;
            medicine.dose.take_dose();
            Ok(())
        })
    }

    /// Reverses one `take_medicine`.
    #[instrument(skip(self))]
    pub fn undo_take_medicine(&mut self, name: &str) -> Result<()> {
        self.mutate(|medicines, today| {
            let medicine = checked_entry(medicines, today, name)?;
            today.untake(name)?;
            medicine.dose.undo_take_dose();
            Ok(())
        })
    }

    /// All medicine ids joined by `+`, in name order. Empty when nothing is stored.
    #[must_use]
    pub fn id_list_string(&self) -> String {
        self.medicines
            .values()
            .map(|medicine| medicine.id.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }

    #[must_use]
    pub const fn today_day(&self) -> usize {
        self.today.day()
    }

    #[must_use]
    pub const fn today_checklist(&self) -> &BTreeMap<String, i64> {
        self.today.checklist()
    }

    #[must_use]
    pub const fn user_medicines(&self) -> &BTreeMap<String, Medicine> {
        &self.medicines
    }

    /// What happened to the persisted checklist when the store was opened.
    #[must_use]
    pub const fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// Progress rows for everything on today's checklist.
    #[must_use]
    pub fn checklist_report(&self, low_supply_threshold: i64) -> Vec<ChecklistRow> {
        checklist_rows(&self.medicines, &self.today, low_supply_threshold)
    }

    #[must_use]
    pub const fn factory(&self) -> &MedicineFactory {
        &self.factory
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Applies `change` to the state and persists it, restoring the previous
    /// state if either step fails.
    fn mutate<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, Medicine>, &mut Today) -> Result<()>,
    {
        let previous = (self.medicines.clone(), self.today.clone());

        let result = change(&mut self.medicines, &mut self.today).and_then(|()| self.persist());
        if let Err(e) = &result {
            warn!("Store mutation failed, state restored: {}", e);
            (self.medicines, self.today) = previous;
        }
        result
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = StoreDocument::from_state(&self.medicines, &self.today);
        let contents = document::encode(&snapshot)?;
        self.storage.write(&contents)?;
        debug!(
            "Persisted {} medicines to {}",
            snapshot.medicines.len(),
            self.storage.location()
        );
        Ok(())
    }
}

/// Looks up a medicine that is both stored and on today's checklist.
fn checked_entry<'a>(
    medicines: &'a mut BTreeMap<String, Medicine>,
    today: &Today,
    name: &str,
) -> Result<&'a mut Medicine> {
    let medicine = medicines
        .get_mut(name)
        .ok_or_else(|| Error::UnknownMedicine {
            name: name.to_string(),
        })?;
    if !today.contains(name) {
        return Err(Error::NotScheduledToday {
            name: name.to_string(),
        });
    }
    Ok(medicine)
}
