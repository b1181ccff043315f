//! Tray menu command handlers.
//!
//! Each menu entry maps to one named function here. Handlers take the
//! application context and the new checkbox/radio state explicitly, and talk to
//! the toolkit only through [`Shell`], so the ordering of side effects can be
//! exercised without a running event loop.

use super::icon::TrayIconAsset;
use super::AppContext;
use crate::config::Preferences;
use crate::error::AppResult;
use crate::i18n::Language;

/// Toolkit operations the handlers need.
pub trait Shell {
    fn toggle_window(&self) -> AppResult<()>;
    fn reload_window(&self) -> AppResult<()>;
    fn apply_tray_icon(&self, asset: TrayIconAsset) -> AppResult<()>;
    fn register_auto_launch(&self, enabled: bool) -> AppResult<()>;
    fn rebuild_tray(&self, prefs: &Preferences) -> AppResult<()>;
    fn quit_app(&self);
}

pub fn toggle_window<S: Shell>(shell: &S) -> AppResult<()> {
    shell.toggle_window()
}

pub fn reload_page<S: Shell>(shell: &S) -> AppResult<()> {
    shell.reload_window()
}

/// Switch tray icon style, then persist.
pub fn set_colored_icon<S: Shell>(shell: &S, ctx: &AppContext, checked: bool) -> AppResult<()> {
    let prefs = ctx.update(|p| p.use_colored_icon = checked);
    let applied = shell.apply_tray_icon(TrayIconAsset::for_preferences(&prefs));
    let saved = ctx.persist();
    applied.and(saved)
}

/// Register/unregister the login item, then persist.
///
/// The preference is saved even when registration fails.
pub fn set_auto_launch<S: Shell>(shell: &S, ctx: &AppContext, checked: bool) -> AppResult<()> {
    ctx.update(|p| p.auto_launch = checked);
    let registered = shell.register_auto_launch(checked);
    let saved = ctx.persist();
    registered.and(saved)
}

/// Switch menu language, persist, and rebuild the tray with the new labels.
pub fn select_language<S: Shell>(
    shell: &S,
    ctx: &AppContext,
    language: Language,
) -> AppResult<()> {
    let prefs = ctx.update(|p| p.language = language);
    let saved = ctx.persist();
    shell.rebuild_tray(&prefs)?;
    saved
}

/// Raise the quit flag and exit.
pub fn quit<S: Shell>(shell: &S, ctx: &AppContext) {
    log::info!("[APP] Quit requested from tray");
    ctx.begin_quit();
    shell.quit_app();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tray::MenuLabels;
    use crate::app::window::CloseAction;
    use crate::config::SettingsStore;
    use crate::error::AppError;
    use crate::i18n::{text, MessageKey};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Toggle,
        Reload,
        Icon(TrayIconAsset),
        AutoLaunch(bool),
        /// Rebuilt with these prefs; file contents at the time of the rebuild
        Rebuild(Preferences, Option<String>),
        Quit,
    }

    struct RecordingShell {
        calls: RefCell<Vec<Call>>,
        settings_path: PathBuf,
        fail_autostart: bool,
    }

    impl RecordingShell {
        fn new(settings_path: PathBuf) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                settings_path,
                fail_autostart: false,
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Shell for RecordingShell {
        fn toggle_window(&self) -> AppResult<()> {
            self.calls.borrow_mut().push(Call::Toggle);
            Ok(())
        }

        fn reload_window(&self) -> AppResult<()> {
            self.calls.borrow_mut().push(Call::Reload);
            Ok(())
        }

        fn apply_tray_icon(&self, asset: TrayIconAsset) -> AppResult<()> {
            self.calls.borrow_mut().push(Call::Icon(asset));
            Ok(())
        }

        fn register_auto_launch(&self, enabled: bool) -> AppResult<()> {
            self.calls.borrow_mut().push(Call::AutoLaunch(enabled));
            if self.fail_autostart {
                return Err(AppError::Autostart("denied".to_string()));
            }
            Ok(())
        }

        fn rebuild_tray(&self, prefs: &Preferences) -> AppResult<()> {
            let on_disk = std::fs::read_to_string(&self.settings_path).ok();
            self.calls.borrow_mut().push(Call::Rebuild(*prefs, on_disk));
            Ok(())
        }

        fn quit_app(&self) {
            self.calls.borrow_mut().push(Call::Quit);
        }
    }

    fn setup() -> (PathBuf, AppContext, RecordingShell) {
        let dir = std::env::temp_dir().join(format!("yahomie_handlers_{}", Uuid::new_v4()));
        let store = SettingsStore::in_dir(&dir);
        let shell = RecordingShell::new(store.path().to_path_buf());
        let ctx = AppContext::load(store);
        (dir, ctx, shell)
    }

    #[test]
    fn test_toggle_and_reload_pass_through() {
        let (_dir, _ctx, shell) = setup();

        toggle_window(&shell).unwrap();
        reload_page(&shell).unwrap();
        toggle_window(&shell).unwrap();

        assert_eq!(shell.calls(), vec![Call::Toggle, Call::Reload, Call::Toggle]);
    }

    #[test]
    fn test_colored_icon_toggled_twice_restores_original() {
        let (dir, ctx, shell) = setup();
        let before = ctx.preferences();
        let original = TrayIconAsset::for_preferences(&before);

        set_colored_icon(&shell, &ctx, !before.use_colored_icon).unwrap();
        set_colored_icon(&shell, &ctx, before.use_colored_icon).unwrap();

        assert_eq!(
            shell.calls(),
            vec![
                Call::Icon(TrayIconAsset::Monochrome),
                Call::Icon(TrayIconAsset::Colored)
            ]
        );
        assert_eq!(TrayIconAsset::for_preferences(&ctx.preferences()), original);
        assert_eq!(ctx.preferences(), before);
        assert_eq!(ctx.store().load().unwrap(), before);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_auto_launch_registers_then_saves() {
        let (dir, ctx, shell) = setup();

        set_auto_launch(&shell, &ctx, true).unwrap();

        assert_eq!(shell.calls(), vec![Call::AutoLaunch(true)]);
        assert!(ctx.preferences().auto_launch);
        assert!(ctx.store().load().unwrap().auto_launch);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_auto_launch_saved_even_if_registration_fails() {
        let (dir, ctx, mut shell) = setup();
        shell.fail_autostart = true;

        let result = set_auto_launch(&shell, &ctx, true);

        assert!(matches!(result, Err(AppError::Autostart(_))));
        assert!(ctx.store().load().unwrap().auto_launch);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_select_language_saves_before_rebuild() {
        let (dir, ctx, shell) = setup();

        select_language(&shell, &ctx, Language::Ru).unwrap();

        let calls = shell.calls();
        assert_eq!(calls.len(), 1);
        let Call::Rebuild(prefs, on_disk) = &calls[0] else {
            panic!("expected a rebuild, got {:?}", calls);
        };
        assert_eq!(prefs.language, Language::Ru);
        let on_disk = on_disk.as_deref().expect("settings not written before rebuild");
        assert!(on_disk.contains(r#""language":"ru""#), "got {}", on_disk);

        // Rebuilt menu uses Russian for every label
        let labels = MenuLabels::for_language(prefs.language);
        assert_eq!(labels.toggle_app, text(Language::Ru, MessageKey::ToggleApp));
        assert_eq!(labels.quit, "Выход");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_quit_allows_window_close() {
        let (_dir, ctx, shell) = setup();
        assert_eq!(CloseAction::for_state(ctx.is_quitting()), CloseAction::Hide);

        quit(&shell, &ctx);

        assert_eq!(shell.calls(), vec![Call::Quit]);
        assert_eq!(CloseAction::for_state(ctx.is_quitting()), CloseAction::Allow);
    }
}
