//! User preferences persisted between runs.
//!
//! Contains the three settings the tray menu can change:
//! - Tray icon style (colored or monochrome)
//! - Launch on login
//! - Tray menu language

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::i18n::Language;

/// Persisted user preferences.
///
/// Keys absent from the file take their default. An unrecognised `language`
/// (unknown code or not a string at all) falls back to English instead of
/// failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Use the colored tray icon instead of the monochrome one.
    #[serde(default = "default_true")]
    pub use_colored_icon: bool,

    /// Register the app to start on user login.
    #[serde(default)]
    pub auto_launch: bool,

    /// Language of the tray menu labels.
    #[serde(default, deserialize_with = "language_or_default")]
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            use_colored_icon: true,
            auto_launch: false,
            language: Language::En,
        }
    }
}

fn default_true() -> bool {
    true
}

fn language_or_default<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    // Any JSON value; only this field falls back on a bad one
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(code)) => Language::from_code(&code).unwrap_or_else(|| {
            log::warn!("[PREFS] Unknown language {:?}, using English", code);
            Language::default()
        }),
        Some(Value::Null) | None => Language::default(),
        Some(other) => {
            log::warn!("[PREFS] Language is not a string ({}), using English", other);
            Language::default()
        },
    })
}
