//! Tray icon selection.

use tauri::{image::Image, AppHandle, Runtime};

use super::tray::TRAY_ID;
use crate::config::Preferences;
use crate::error::{AppError, AppResult};

/// The two bundled tray icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconAsset {
    Colored,
    Monochrome,
}

impl TrayIconAsset {
    pub fn for_preferences(prefs: &Preferences) -> Self {
        if prefs.use_colored_icon {
            TrayIconAsset::Colored
        } else {
            TrayIconAsset::Monochrome
        }
    }

    /// Encoded PNG bytes compiled into the binary.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            TrayIconAsset::Colored => include_bytes!("../../icons/tray-colored.png"),
            TrayIconAsset::Monochrome => include_bytes!("../../icons/tray-mono.png"),
        }
    }

    pub fn image(self) -> AppResult<Image<'static>> {
        Ok(Image::from_bytes(self.bytes())?)
    }
}

/// Apply `asset` to the app's tray icon.
pub fn refresh_icon<R: Runtime>(app: &AppHandle<R>, asset: TrayIconAsset) -> AppResult<()> {
    let tray = app.tray_by_id(TRAY_ID).ok_or_else(|| AppError::TrayMissing {
        id: TRAY_ID.to_string(),
    })?;
    tray.set_icon(Some(asset.image()?))?;

    log::debug!("[TRAY] Icon set to {:?}", asset);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_asset_follows_preference() {
        let mut prefs = Preferences::default();
        assert_eq!(TrayIconAsset::for_preferences(&prefs), TrayIconAsset::Colored);

        prefs.use_colored_icon = false;
        assert_eq!(
            TrayIconAsset::for_preferences(&prefs),
            TrayIconAsset::Monochrome
        );
    }

    #[test]
    fn test_bundled_assets_are_distinct_pngs() {
        let colored = TrayIconAsset::Colored.bytes();
        let mono = TrayIconAsset::Monochrome.bytes();

        assert!(colored.starts_with(PNG_MAGIC));
        assert!(mono.starts_with(PNG_MAGIC));
        assert_ne!(colored, mono);
    }
}
