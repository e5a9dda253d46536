//! Core business logic - the medicine scheduling and reconciliation engine.
//!
//! Framework-agnostic: nothing in here renders output or parses user input.

/// Persisted JSON document model and codec
pub mod document;
/// Construction of medicines from raw field values
pub mod factory;
/// Day-rollover reconciliation of the persisted checklist
pub mod reconcile;
/// Checklist progress rows for presentation layers
pub mod report;
/// Storage backends for the document
pub mod storage;
/// The medicine store (write-through data access object)
pub mod store;

pub use factory::MedicineFactory;
pub use reconcile::Reconciliation;
pub use storage::{DocumentStorage, InMemoryStorage, JsonFileStorage};
pub use store::MedicineStore;
