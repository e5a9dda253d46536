//! Today entity - The checklist of doses taken on the current day.
//!
//! A checklist maps each medicine scheduled for the day to the number of doses
//! taken so far. Entries are only ever created by [`Today::add`]; taking or
//! untaking a dose of a medicine that has no entry is an error.

use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// Doses taken per medicine on one day of the week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Today {
    day: usize,
    checklist: BTreeMap<String, i64>,
}

impl Today {
    /// Creates an empty checklist for the given day index (Sunday = 0).
    #[must_use]
    pub const fn new(day: usize) -> Self {
        Self {
            day,
            checklist: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites the entry for `name`.
    pub fn add(&mut self, name: &str, taken: i64) {
        self.checklist.insert(name.to_string(), taken);
    }

    pub fn remove(&mut self, name: &str) {
        self.checklist.remove(name);
    }

    pub fn take(&mut self, name: &str) -> Result<()> {
        *self.entry_mut(name)? += 1;
        Ok(())
    }

    /// Decrements the taken count. There is no floor at zero.
    pub fn untake(&mut self, name: &str) -> Result<()> {
        *self.entry_mut(name)? -= 1;
        Ok(())
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn checklist(&self) -> &BTreeMap<String, i64> {
        &self.checklist
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.checklist.contains_key(name)
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut i64> {
        self.checklist
            .get_mut(name)
            .ok_or_else(|| Error::UnknownMedicine {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_overwrites_existing_entry() {
        let mut today = Today::new(1);
        today.add("Aspirin", 2);
        today.add("Aspirin", 0);

        assert_eq!(today.checklist().get("Aspirin"), Some(&0));
        assert_eq!(today.checklist().len(), 1);
    }

    #[test]
    fn test_take_and_untake() -> Result<()> {
        let mut today = Today::new(3);
        today.add("Metformin", 0);

        today.take("Metformin")?;
        today.take("Metformin")?;
        assert_eq!(today.checklist().get("Metformin"), Some(&2));

        today.untake("Metformin")?;
        today.untake("Metformin")?;
        today.untake("Metformin")?;
        assert_eq!(today.checklist().get("Metformin"), Some(&-1));
        Ok(())
    }

    #[test]
    fn test_take_unknown_does_not_create_entry() {
        let mut today = Today::new(0);

        let result = today.take("Ghost");
        assert!(matches!(result, Err(Error::UnknownMedicine { name }) if name == "Ghost"));
        assert!(!today.contains("Ghost"));

        assert!(today.untake("Ghost").is_err());
        assert!(today.checklist().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut today = Today::new(5);
        today.add("Vitamin D", 1);
        today.remove("Ibuprofen");
        today.remove("Vitamin D");

        assert!(today.checklist().is_empty());
        assert_eq!(today.day(), 5);
    }
}
