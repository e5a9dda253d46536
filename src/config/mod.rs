/// Application settings loading from medbay.toml
pub mod settings;

/// Document location resolution and store opening
pub mod storage;

pub use settings::{Settings, load_default_settings, load_settings};
pub use storage::{get_data_path, open_store};
