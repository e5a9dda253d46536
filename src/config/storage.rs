//! Storage configuration for `MedBay`.
//!
//! Resolves where the medicine document is kept and opens the store on it.

use super::settings::Settings;
use crate::core::{JsonFileStorage, MedicineStore};
use crate::errors::Result;
use chrono::Local;
use std::path::PathBuf;

/// Environment variable that overrides the document location
pub const DATA_PATH_ENV: &str = "MEDBAY_DATA_PATH";

/// Document location used when nothing else is configured
pub const DEFAULT_DATA_PATH: &str = "./medicine.json";

/// Picks the document path: the environment override, then the settings
/// file, then the default.
#[must_use]
pub fn resolve_data_path(env_override: Option<String>, settings: &Settings) -> PathBuf {
    env_override
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| settings.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Gets the document path from `MEDBAY_DATA_PATH` or the settings.
#[must_use]
pub fn get_data_path(settings: &Settings) -> PathBuf {
    resolve_data_path(std::env::var(DATA_PATH_ENV).ok(), settings)
}

/// Opens the JSON file store for the local current date.
pub fn open_store(settings: &Settings) -> Result<MedicineStore<JsonFileStorage>> {
    let path = get_data_path(settings);
    tracing::debug!("Opening medicine store at {}", path.display());
    MedicineStore::open(JsonFileStorage::new(path), Local::now().date_naive())
}
