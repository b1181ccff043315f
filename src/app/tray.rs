//! System tray setup and event handling.
//!
//! The tray menu is built from the current preferences and the label table for
//! the selected language. Changing the language tears the tray down and builds
//! a new one; every other menu command updates the existing tray in place.
//!
//! Menu clicks are routed by [`handle_menu_event`], registered once on the app
//! builder. `build_tray` must not register a menu listener of its own: it runs
//! from inside menu dispatch when the language changes.

use parking_lot::Mutex;
use tauri::{
    menu::{CheckMenuItem, IconMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu},
    tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager, Runtime,
};

use super::handlers;
use super::icon::TrayIconAsset;
use super::AppContext;
use crate::config::Preferences;
use crate::error::AppResult;
use crate::i18n::{text, Language, MessageKey};

/// Id of the app's only tray icon.
pub const TRAY_ID: &str = "main-tray";

/// Commands reachable from the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleWindow,
    Reload,
    ColoredIcon,
    AutoLaunch,
    SelectLanguage(Language),
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::ToggleWindow,
        MenuAction::Reload,
        MenuAction::ColoredIcon,
        MenuAction::AutoLaunch,
        MenuAction::SelectLanguage(Language::En),
        MenuAction::SelectLanguage(Language::Ru),
        MenuAction::Quit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MenuAction::ToggleWindow => "toggle",
            MenuAction::Reload => "reload",
            MenuAction::ColoredIcon => "colored_icon",
            MenuAction::AutoLaunch => "auto_launch",
            MenuAction::SelectLanguage(Language::En) => "lang_en",
            MenuAction::SelectLanguage(Language::Ru) => "lang_ru",
            MenuAction::Quit => "quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// Every label shown in the tray menu, resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    pub title: &'static str,
    pub toggle_app: &'static str,
    pub refresh: &'static str,
    pub use_colored_icon: &'static str,
    pub enable_auto_launch: &'static str,
    pub language: &'static str,
    pub english: &'static str,
    pub russian: &'static str,
    pub quit: &'static str,
}

impl MenuLabels {
    pub fn for_language(language: Language) -> Self {
        Self {
            title: text(language, MessageKey::Title),
            toggle_app: text(language, MessageKey::ToggleApp),
            refresh: text(language, MessageKey::Refresh),
            use_colored_icon: text(language, MessageKey::UseColoredIcon),
            enable_auto_launch: text(language, MessageKey::EnableAutoLaunch),
            language: text(language, MessageKey::Language),
            english: text(language, Language::En.name_key()),
            russian: text(language, Language::Ru.name_key()),
            quit: text(language, MessageKey::Quit),
        }
    }
}

/// Holds the checkbox items of the current menu so a click can read the
/// toggled state.
pub struct TrayMenuHandles<R: Runtime> {
    pub colored_icon: CheckMenuItem<R>,
    pub auto_launch: CheckMenuItem<R>,
}

/// Managed slot for the handles of whichever tray menu is live.
pub type TrayMenuSlot<R> = Mutex<Option<TrayMenuHandles<R>>>;

/// Build the tray icon and its menu from `prefs`.
pub fn build_tray<R: Runtime>(
    app: &AppHandle<R>,
    prefs: &Preferences,
) -> AppResult<TrayIcon<R>> {
    let labels = MenuLabels::for_language(prefs.language);

    let title = IconMenuItem::with_id(
        app,
        "title",
        labels.title,
        false,
        Some(TrayIconAsset::Colored.image()?),
        None::<&str>,
    )?;
    let toggle = MenuItem::with_id(
        app,
        MenuAction::ToggleWindow.id(),
        labels.toggle_app,
        true,
        None::<&str>,
    )?;
    let reload = MenuItem::with_id(
        app,
        MenuAction::Reload.id(),
        labels.refresh,
        true,
        None::<&str>,
    )?;
    let colored_icon = CheckMenuItem::with_id(
        app,
        MenuAction::ColoredIcon.id(),
        labels.use_colored_icon,
        true,
        prefs.use_colored_icon,
        None::<&str>,
    )?;
    let auto_launch = CheckMenuItem::with_id(
        app,
        MenuAction::AutoLaunch.id(),
        labels.enable_auto_launch,
        true,
        prefs.auto_launch,
        None::<&str>,
    )?;

    // Radio group: exactly one language is checked
    let lang_en = CheckMenuItem::with_id(
        app,
        MenuAction::SelectLanguage(Language::En).id(),
        labels.english,
        true,
        prefs.language == Language::En,
        None::<&str>,
    )?;
    let lang_ru = CheckMenuItem::with_id(
        app,
        MenuAction::SelectLanguage(Language::Ru).id(),
        labels.russian,
        true,
        prefs.language == Language::Ru,
        None::<&str>,
    )?;
    let language = Submenu::with_id_and_items(
        app,
        "language",
        labels.language,
        true,
        &[&lang_en, &lang_ru],
    )?;

    let quit = MenuItem::with_id(app, MenuAction::Quit.id(), labels.quit, true, None::<&str>)?;

    let menu = Menu::with_items(
        app,
        &[
            &title,
            &PredefinedMenuItem::separator(app)?,
            &toggle,
            &reload,
            &PredefinedMenuItem::separator(app)?,
            &colored_icon,
            &auto_launch,
            &language,
            &PredefinedMenuItem::separator(app)?,
            &quit,
        ],
    )?;

    let tray = TrayIconBuilder::with_id(TRAY_ID)
        .icon(TrayIconAsset::for_preferences(prefs).image()?)
        .tooltip(labels.title)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(handle_tray_icon_event)
        .build(app)?;

    if let Some(slot) = app.try_state::<TrayMenuSlot<R>>() {
        *slot.lock() = Some(TrayMenuHandles {
            colored_icon,
            auto_launch,
        });
    }

    log::info!("[TRAY] Tray built ({})", prefs.language.code());
    Ok(tray)
}

/// Drop the current tray and build a fresh one from `prefs`.
pub fn rebuild<R: Runtime>(app: &AppHandle<R>, prefs: &Preferences) -> AppResult<()> {
    if app.remove_tray_by_id(TRAY_ID).is_none() {
        log::warn!("[TRAY] No tray to remove before rebuild");
    }
    build_tray(app, prefs)?;
    Ok(())
}

/// Checked state of a checkbox item after the click that triggered `action`.
fn checkbox_state<R: Runtime>(app: &AppHandle<R>, action: MenuAction) -> Option<bool> {
    let slot = app.try_state::<TrayMenuSlot<R>>()?;
    let handles = slot.lock();
    let handles = handles.as_ref()?;

    let item = match action {
        MenuAction::ColoredIcon => &handles.colored_icon,
        MenuAction::AutoLaunch => &handles.auto_launch,
        _ => return None,
    };
    item.is_checked().ok()
}

/// App-wide menu listener; register once with `Builder::on_menu_event`.
pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    let Some(action) = MenuAction::from_id(event.id.as_ref()) else {
        log::debug!("[TRAY] Ignoring menu event {:?}", event.id);
        return;
    };
    let Some(ctx) = app.try_state::<AppContext>() else {
        log::error!("[TRAY] App context not initialised, dropping {:?}", action);
        return;
    };

    let result = match action {
        MenuAction::ToggleWindow => handlers::toggle_window(app),
        MenuAction::Reload => handlers::reload_page(app),
        MenuAction::ColoredIcon => {
            let checked = checkbox_state(app, action)
                .unwrap_or(!ctx.preferences().use_colored_icon);
            handlers::set_colored_icon(app, &ctx, checked)
        },
        MenuAction::AutoLaunch => {
            let checked =
                checkbox_state(app, action).unwrap_or(!ctx.preferences().auto_launch);
            handlers::set_auto_launch(app, &ctx, checked)
        },
        MenuAction::SelectLanguage(language) => handlers::select_language(app, &ctx, language),
        MenuAction::Quit => {
            handlers::quit(app, &ctx);
            Ok(())
        },
    };

    if let Err(e) = result {
        log::error!("[TRAY] {:?} failed: {}", action, e);
    }
}

fn handle_tray_icon_event<R: Runtime>(tray: &TrayIcon<R>, event: TrayIconEvent) {
    if let TrayIconEvent::Click {
        button: MouseButton::Left,
        button_state: MouseButtonState::Up,
        ..
    } = event
    {
        if let Err(e) = handlers::toggle_window(tray.app_handle()) {
            log::error!("[TRAY] Failed to toggle window on tray click: {}", e);
        }
    }
}
