//! Application lifecycle and platform integration.
//!
//! - `context`: shared state handed to every handler
//! - `handlers`: named tray menu command handlers
//! - `tray`: tray icon and menu construction
//! - `icon`: tray icon asset selection
//! - `window`: the dashboard window
//! - `autostart`: login item registration
//! - `events`: window and run-loop event handlers

pub mod autostart;
pub mod context;
pub mod events;
pub mod handlers;
pub mod icon;
pub mod tray;
pub mod window;

use tauri::{AppHandle, Runtime};

use crate::config::Preferences;
use crate::error::AppResult;

pub use context::AppContext;
pub use handlers::Shell;
pub use icon::TrayIconAsset;
pub use tray::{TrayMenuSlot, TRAY_ID};

impl<R: Runtime> Shell for AppHandle<R> {
    fn toggle_window(&self) -> AppResult<()> {
        window::toggle_visibility(self)
    }

    fn reload_window(&self) -> AppResult<()> {
        window::reload(self)
    }

    fn apply_tray_icon(&self, asset: TrayIconAsset) -> AppResult<()> {
        icon::refresh_icon(self, asset)
    }

    fn register_auto_launch(&self, enabled: bool) -> AppResult<()> {
        autostart::set_auto_launch(self, enabled)
    }

    fn rebuild_tray(&self, prefs: &Preferences) -> AppResult<()> {
        tray::rebuild(self, prefs)
    }

    fn quit_app(&self) {
        self.exit(0);
    }
}
