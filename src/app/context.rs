//! Application context shared by every tray and window handler.
//!
//! Built once in the setup hook and registered as Tauri managed state, so
//! handlers reach it through `Manager::state` instead of process globals.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::config::{Preferences, SettingsStore};
use crate::error::AppResult;

/// Live preferences, their backing store, and the quit flag.
pub struct AppContext {
    store: SettingsStore,
    prefs: Mutex<Preferences>,
    quitting: AtomicBool,
}

impl AppContext {
    pub fn new(store: SettingsStore, prefs: Preferences) -> Self {
        Self {
            store,
            prefs: Mutex::new(prefs),
            quitting: AtomicBool::new(false),
        }
    }

    /// Load preferences from `store`, falling back to defaults on any error.
    pub fn load(store: SettingsStore) -> Self {
        let prefs = store.load_or_default();
        log::info!("[CONTEXT] Loaded preferences {:?}", prefs);
        Self::new(store, prefs)
    }

    /// Snapshot of the current preferences.
    pub fn preferences(&self) -> Preferences {
        *self.prefs.lock()
    }

    /// Mutate the in-memory preferences and return the result.
    ///
    /// Does not write to disk; call [`AppContext::persist`] for that.
    pub fn update(&self, f: impl FnOnce(&mut Preferences)) -> Preferences {
        let mut prefs = self.prefs.lock();
        f(&mut prefs);
        *prefs
    }

    /// Write the current preferences to the settings file.
    pub fn persist(&self) -> AppResult<()> {
        let prefs = self.preferences();
        self.store.save(&prefs)
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Mark the app as quitting so the window close handler lets it close.
    pub fn begin_quit(&self) {
        self.quitting.store(true, Ordering::SeqCst);
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_store() -> (PathBuf, SettingsStore) {
        let dir = std::env::temp_dir().join(format!("yahomie_ctx_{}", Uuid::new_v4()));
        let store = SettingsStore::in_dir(&dir);
        (dir, store)
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let (dir, store) = temp_store();
        let ctx = AppContext::load(store);

        assert_eq!(ctx.preferences(), Preferences::default());
        assert!(!ctx.is_quitting());
        assert!(!dir.exists());
    }

    #[test]
    fn test_update_does_not_persist() {
        let (dir, store) = temp_store();
        let ctx = AppContext::load(store);

        let prefs = ctx.update(|p| p.language = Language::Ru);
        assert_eq!(prefs.language, Language::Ru);
        assert_eq!(ctx.preferences().language, Language::Ru);
        assert!(!ctx.store().path().exists());

        ctx.persist().expect("persist failed");
        let reloaded = AppContext::load(SettingsStore::in_dir(&dir));
        assert_eq!(reloaded.preferences().language, Language::Ru);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_quit_flag() {
        let (_dir, store) = temp_store();
        let ctx = AppContext::new(store, Preferences::default());

        assert!(!ctx.is_quitting());
        ctx.begin_quit();
        assert!(ctx.is_quitting());
    }
}
