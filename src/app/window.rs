//! The dashboard window.
//!
//! A single borderless, always-on-top webview anchored to the bottom-right
//! corner of the primary monitor's work area. It is created hidden at startup
//! and only ever shown/hidden afterwards; closing it hides it unless the app
//! is quitting.

use tauri::{
    AppHandle, LogicalPosition, LogicalSize, Manager, Runtime, Url, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};

use crate::error::{AppError, AppResult};

/// Label of the dashboard window.
pub const SHELL_WINDOW_LABEL: &str = "main";

/// Page hosted in the window.
pub const DASHBOARD_URL: &str = "https://yandex.ru/quasar/iot/";

/// Fixed window size in logical pixels.
pub const WINDOW_WIDTH: f64 = 400.0;
pub const WINDOW_HEIGHT: f64 = 500.0;

/// What a close request on the dashboard window turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Cancel the close and hide the window instead.
    Hide,
    /// Let the window close (the app is exiting).
    Allow,
}

impl CloseAction {
    pub fn for_state(quitting: bool) -> Self {
        if quitting {
            CloseAction::Allow
        } else {
            CloseAction::Hide
        }
    }
}

/// Top-left corner that puts the window flush with the bottom-right of a work
/// area of the given size.
pub fn anchor_bottom_right(work_area: LogicalSize<f64>) -> LogicalPosition<f64> {
    LogicalPosition::new(
        work_area.width - WINDOW_WIDTH,
        work_area.height - WINDOW_HEIGHT,
    )
}

/// Work area of the primary monitor in logical pixels.
fn primary_work_area<R: Runtime>(app: &AppHandle<R>) -> AppResult<Option<LogicalSize<f64>>> {
    let Some(monitor) = app.primary_monitor()? else {
        return Ok(None);
    };

    let size = monitor.work_area().size;
    Ok(Some(size.to_logical(monitor.scale_factor())))
}

/// Create the dashboard window (hidden).
pub fn create_shell_window<R: Runtime>(app: &AppHandle<R>) -> AppResult<WebviewWindow<R>> {
    let url: Url = DASHBOARD_URL.parse().map_err(|e| AppError::InvalidUrl {
        url: DASHBOARD_URL.to_string(),
        reason: format!("{}", e),
    })?;

    // Placement is computed once; display changes are not tracked
    let position = match primary_work_area(app)? {
        Some(work_area) => anchor_bottom_right(work_area),
        None => {
            log::warn!("[WINDOW] No primary monitor found, placing window at origin");
            LogicalPosition::new(0.0, 0.0)
        },
    };

    log::info!(
        "[WINDOW] Creating dashboard window at ({}, {}) with size {}x{}",
        position.x,
        position.y,
        WINDOW_WIDTH,
        WINDOW_HEIGHT
    );

    let window = WebviewWindowBuilder::new(app, SHELL_WINDOW_LABEL, WebviewUrl::External(url))
        .title("YaHomie")
        .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .position(position.x, position.y)
        .decorations(false)
        .transparent(true)
        .always_on_top(true)
        .resizable(false)
        .maximizable(false)
        .skip_taskbar(true)
        .visible(false)
        .focused(false)
        .build()?;

    Ok(window)
}

fn shell_window<R: Runtime>(app: &AppHandle<R>) -> AppResult<WebviewWindow<R>> {
    app.get_webview_window(SHELL_WINDOW_LABEL)
        .ok_or_else(|| AppError::WindowMissing {
            label: SHELL_WINDOW_LABEL.to_string(),
        })
}

/// Show and focus the dashboard window.
pub fn show<R: Runtime>(app: &AppHandle<R>) -> AppResult<()> {
    let window = shell_window(app)?;
    window.show()?;
    window.set_focus()?;
    Ok(())
}

/// Hide the window if it is visible, show it otherwise.
pub fn toggle_visibility<R: Runtime>(app: &AppHandle<R>) -> AppResult<()> {
    let window = shell_window(app)?;

    if window.is_visible()? {
        window.hide()?;
    } else {
        window.show()?;
        window.set_focus()?;
    }
    Ok(())
}

/// Reload the hosted page.
pub fn reload<R: Runtime>(app: &AppHandle<R>) -> AppResult<()> {
    let window = shell_window(app)?;
    window.eval("window.location.reload()")?;
    Ok(())
}
