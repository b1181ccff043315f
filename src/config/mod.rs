//! Persisted user configuration.
//!
//! - `Preferences`: the settings record (icon style, auto launch, language)
//! - `SettingsStore`: reads and writes it as JSON in the app config dir

pub mod preferences;
pub mod store;

pub use preferences::Preferences;
pub use store::{SettingsStore, SETTINGS_FILE_NAME};
