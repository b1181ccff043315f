//! Window and run-loop event handlers.

use tauri::{AppHandle, Manager, RunEvent, Runtime, Window, WindowEvent};

use super::window::{self, CloseAction, SHELL_WINDOW_LABEL};
use super::AppContext;

/// Handle window events for the application.
///
/// This is called from the Tauri builder's `on_window_event` hook.
pub fn handle_window_event<R: Runtime>(window: &Window<R>, event: &WindowEvent) {
    match event {
        // Hide to tray instead of closing, unless we are quitting
        WindowEvent::CloseRequested { api, .. } => {
            if window.label() != SHELL_WINDOW_LABEL {
                return;
            }

            let quitting = window
                .try_state::<AppContext>()
                .map(|ctx| ctx.is_quitting())
                .unwrap_or(false);

            match CloseAction::for_state(quitting) {
                CloseAction::Hide => {
                    api.prevent_close();
                    if let Err(e) = window.hide() {
                        log::error!("[WINDOW] Failed to hide on close: {}", e);
                    }
                },
                CloseAction::Allow => {
                    log::info!("[WINDOW] Closing dashboard window");
                },
            }
        },

        _ => {},
    }
}

/// Handle app-level run loop events.
pub fn handle_run_event<R: Runtime>(app: &AppHandle<R>, event: &RunEvent) {
    match event {
        // Dock icon clicked with nothing on screen
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => {
            if let Err(e) = window::show(app) {
                log::error!("[APP] Failed to show window on reopen: {}", e);
            }
        },

        RunEvent::Exit => {
            log::info!("[APP] {} exiting", app.package_info().name);
        },

        _ => {},
    }
}

/// A second launch was attempted; surface the running instance instead.
pub fn handle_second_instance<R: Runtime>(app: &AppHandle<R>) {
    log::info!("[APP] Second instance started, showing existing window");
    if let Err(e) = window::show(app) {
        log::error!("[APP] Failed to show window for second instance: {}", e);
    }
}
