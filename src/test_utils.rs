//! Shared test utilities for `MedBay`.
//!
//! This module provides helpers for building medicines with sensible defaults,
//! reopening stores from what they persisted, and a storage backend whose
//! writes can be made to fail.

use crate::{
    core::{DocumentStorage, InMemoryStorage, MedicineFactory, MedicineStore},
    entities::{Medicine, WeeklySchedule},
    errors::{Error, Result},
};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Inventory given to every medicine built by these helpers.
pub const DEFAULT_INVENTORY: i64 = 30;

/// Installs a test-writer subscriber once; later calls are ignored.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a medicine with the given schedule.
///
/// # Defaults
/// * dose: 1 tablet, `DEFAULT_INVENTORY` on hand
/// * `description`: empty
/// * `id`: the name in lowercase
pub fn scheduled_medicine(name: &str, schedule: [u32; 7]) -> Medicine {
    MedicineFactory::new().create_medicine(
        name.to_string(),
        1,
        DEFAULT_INVENTORY,
        "tablet".to_string(),
        WeeklySchedule::new(schedule),
        String::new(),
        name.to_lowercase(),
    )
}

/// Creates a daily medicine with a custom lookup id.
pub fn medicine_with_id(name: &str, id: &str) -> Medicine {
    let mut medicine = scheduled_medicine(name, [1; 7]);
    medicine.id = id.to_string();
    medicine
}

/// Keys medicines by name, the way a store does.
pub fn medicine_map(medicines: Vec<Medicine>) -> BTreeMap<String, Medicine> {
    medicines
        .into_iter()
        .map(|medicine| (medicine.name.clone(), medicine))
        .collect()
}

/// Opens a new store on `day` from the document `store` last wrote.
pub fn reopen_on_day(
    store: &MedicineStore<InMemoryStorage>,
    day: usize,
) -> Result<MedicineStore<InMemoryStorage>> {
    let contents = store.storage().contents().unwrap_or_default();
    MedicineStore::open_on_day(InMemoryStorage::with_document(contents), day)
}

/// Asserts every stored medicine is on the checklist iff it is due today,
/// and that the checklist names nothing else.
pub fn assert_schedule_invariant<S: DocumentStorage>(store: &MedicineStore<S>) {
    let day = store.today_day();
    for (name, medicine) in store.user_medicines() {
        assert_eq!(
            store.today_checklist().contains_key(name),
            medicine.is_scheduled_on(day),
            "checklist membership of '{name}' disagrees with its schedule"
        );
    }
    for name in store.today_checklist().keys() {
        assert!(store.exists(name), "checklist names unknown medicine '{name}'");
    }
}

/// In-memory storage whose writes fail while `fail_writes` is set.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    pub inner: InMemoryStorage,
    pub fail_writes: bool,
}

impl DocumentStorage for FlakyStorage {
    fn read(&self) -> Result<Option<String>> {
        self.inner.read()
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::PersistenceUnavailable {
                location: self.location(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.write(contents)
    }

    fn location(&self) -> String {
        "flaky memory".to_string()
    }
}
