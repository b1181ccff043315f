use tauri::{AppHandle, Runtime};

use crate::error::{AppError, AppResult};

/// Register or unregister the running executable as a login item.
pub fn set_auto_launch<R: Runtime>(app: &AppHandle<R>, enabled: bool) -> AppResult<()> {
    #[cfg(desktop)]
    {
        use tauri_plugin_autostart::ManagerExt;

        let autostart_manager = app.autolaunch();

        if enabled {
            autostart_manager
                .enable()
                .map_err(|e| AppError::Autostart(format!("Failed to enable autostart: {}", e)))?;
        } else {
            autostart_manager
                .disable()
                .map_err(|e| AppError::Autostart(format!("Failed to disable autostart: {}", e)))?;
        }

        log::info!("[AUTOSTART] Launch on login set to {}", enabled);
        Ok(())
    }

    #[cfg(not(desktop))]
    {
        let _ = (app, enabled);
        Err(AppError::Autostart(
            "Autostart is not supported on this platform".to_string(),
        ))
    }
}
