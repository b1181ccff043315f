use tauri::Manager;

#[cfg(desktop)]
use tauri_plugin_autostart::MacosLauncher;

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
mod logging;

use app::{AppContext, TrayMenuSlot};
use config::SettingsStore;

pub fn run() {
    let mut builder = tauri::Builder::default();

    #[cfg(desktop)]
    {
        // Single-instance must be registered first
        builder = builder
            .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                app::events::handle_second_instance(app);
            }))
            .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None));
    }

    let tauri_app = builder
        .on_window_event(app::events::handle_window_event)
        // Registered once; the tray is rebuilt from inside menu dispatch
        .on_menu_event(app::tray::handle_menu_event)
        .setup(|app| {
            let log_dir = app.path().app_log_dir()?;
            if let Err(e) = logging::init(&log_dir) {
                eprintln!("Failed to initialize logging: {}", e);
            }

            let config_dir = app.path().app_config_dir()?;
            let context = AppContext::load(SettingsStore::in_dir(&config_dir));
            let prefs = context.preferences();
            app.manage(context);
            app.manage(TrayMenuSlot::<tauri::Wry>::default());

            let handle = app.handle();

            // Keep the OS login item in sync with the stored preference
            if let Err(e) = app::autostart::set_auto_launch(handle, prefs.auto_launch) {
                log::error!("[APP] {}", e);
            }

            app::window::create_shell_window(handle)?;
            app::tray::build_tray(handle, &prefs)?;

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    tauri_app.run(|app_handle, event| app::events::handle_run_event(app_handle, &event));
}
