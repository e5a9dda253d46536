//! Entity module - The in-memory data model of the medicine tracker.
//! A `Medicine` owns its `Dose` and `WeeklySchedule`; `Today` holds the
//! per-day checklist that refers to medicines by name.

pub mod dose;
pub mod medicine;
pub mod schedule;
pub mod today;

pub use dose::Dose;
pub use medicine::Medicine;
pub use schedule::{DAY_LABELS, DAYS_IN_WEEK, WeeklySchedule, day_index_of, day_index_of_weekday};
pub use today::Today;
