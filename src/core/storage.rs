//! Storage backends for the medicine document.
//!
//! A backend only moves document text in and out; parsing and reconciliation
//! happen in the store. `JsonFileStorage` is what the application uses.
//! `InMemoryStorage` keeps the document in memory for tests and embedding.

use crate::errors::{Error, Result};
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Where a store reads its document from and writes it back to.
pub trait DocumentStorage {
    /// Returns the stored document, or `None` when nothing has been stored yet
    /// (absent or empty location).
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored document.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;
}

/// Stores the document as a JSON file on disk.
///
/// Writes go to a sibling `.tmp` file which is synced and then renamed over the
/// target, so a reader only ever sees the last fully-written document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn unavailable(&self, source: std::io::Error) -> Error {
        Error::PersistenceUnavailable {
            location: self.location(),
            source,
        }
    }

    fn write_temp(&self, temp: &Path, contents: &str) -> std::io::Result<()> {
        let mut file = File::create(temp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }
}

impl DocumentStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.unavailable(e)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let temp = self.temp_path();
        let written = self
            .write_temp(&temp, contents)
            .and_then(|()| fs::rename(&temp, &self.path));

        if let Err(e) = written {
            warn!("Failed to write {}: {}", self.location(), e);
            let _ = fs::remove_file(&temp);
            return Err(self.unavailable(e));
        }

        debug!("Wrote {} bytes to {}", contents.len(), self.location());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the document in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    contents: Option<String>,
}

impl InMemoryStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self { contents: None }
    }

    /// Starts from an already-persisted document.
    #[must_use]
    pub fn with_document(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// The last document written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl DocumentStorage for InMemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone().filter(|c| !c.is_empty()))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_file_read_missing_and_empty() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicine.json");
        let storage = JsonFileStorage::new(&path);

        assert!(storage.read()?.is_none());

        fs::write(&path, "").unwrap();
        assert!(storage.read()?.is_none());
        Ok(())
    }

    #[test]
    fn test_file_write_then_read() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("medicine.json");
        let mut storage = JsonFileStorage::new(&path);

        storage.write("{\"first\":1}")?;
        storage.write("{\"second\":2}")?;

        assert_eq!(storage.read()?.as_deref(), Some("{\"second\":2}"));
        assert!(!dir.path().join("nested").join("medicine.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_file_write_failure_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        // A directory sits where the file should go, so the rename cannot replace it.
        let path = dir.path().join("medicine.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
        let mut storage = JsonFileStorage::new(&path);

        let result = storage.write("{}");
        assert!(matches!(
            result,
            Err(Error::PersistenceUnavailable { .. })
        ));
        assert!(!dir.path().join("medicine.json.tmp").exists());
    }

    #[test]
    fn test_file_read_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert!(matches!(
            storage.read(),
            Err(Error::PersistenceUnavailable { .. })
        ));
    }

    #[test]
    fn test_in_memory_round_trip() -> Result<()> {
        let mut storage = InMemoryStorage::new();
        assert!(storage.read()?.is_none());

        storage.write("doc")?;
        assert_eq!(storage.contents(), Some("doc"));
        assert_eq!(storage.read()?.as_deref(), Some("doc"));

        let seeded = InMemoryStorage::with_document("");
        assert!(seeded.read()?.is_none());
        Ok(())
    }
}
