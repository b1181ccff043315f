//! JSON file persistence for [`Preferences`].
//!
//! The whole record is rewritten on every save. Nothing else ever writes the
//! file (the app is single-instance), so there is no locking.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Preferences;
use crate::error::{AppError, AppResult};

/// File name inside the app config directory.
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Reads and writes the preferences file at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `config.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the preferences file.
    ///
    /// A missing file is not an error and yields the defaults. Read and parse
    /// failures are returned so the caller can decide what to do with them.
    pub fn load(&self) -> AppResult<Preferences> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("[SETTINGS] No file at {:?}, using defaults", self.path);
                return Ok(Preferences::default());
            },
            Err(e) => return Err(AppError::io(&self.path, e)),
        };

        Ok(serde_json::from_str(&data)?)
    }

    /// Read the preferences file, logging any failure and falling back to the
    /// defaults. The file on disk is left as it is.
    pub fn load_or_default(&self) -> Preferences {
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::error!("[SETTINGS] Error loading config: {}", e);
                Preferences::default()
            },
        }
    }

    /// Overwrite the preferences file with `prefs`.
    pub fn save(&self, prefs: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let json = serde_json::to_string(prefs)?;
        fs::write(&self.path, json).map_err(|e| AppError::io(&self.path, e))?;

        log::debug!("[SETTINGS] Saved {:?} to {:?}", prefs, self.path);
        Ok(())
    }
}
