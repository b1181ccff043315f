//! Tray menu strings.
//!
//! A static two-level table keyed by `(Language, MessageKey)`. The lookup is an
//! exhaustive match, so every combination resolves to a string.

use serde::{Deserialize, Serialize};

/// Languages the tray menu can be shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    /// Parse a persisted language code (`"en"`, `"ru"`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// The code written to the settings file.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Key of this language's own entry in the language submenu.
    pub fn name_key(self) -> MessageKey {
        match self {
            Language::En => MessageKey::English,
            Language::Ru => MessageKey::Russian,
        }
    }
}

/// Label keys used by the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    ToggleApp,
    Refresh,
    UseColoredIcon,
    EnableAutoLaunch,
    Quit,
    Language,
    English,
    Russian,
}

impl MessageKey {
    pub const ALL: [MessageKey; 9] = [
        MessageKey::Title,
        MessageKey::ToggleApp,
        MessageKey::Refresh,
        MessageKey::UseColoredIcon,
        MessageKey::EnableAutoLaunch,
        MessageKey::Quit,
        MessageKey::Language,
        MessageKey::English,
        MessageKey::Russian,
    ];
}

/// Look up the display string for `key` in `language`.
pub fn text(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => match key {
            MessageKey::Title => "YaHomie",
            MessageKey::ToggleApp => "Toggle App",
            MessageKey::Refresh => "Refresh",
            MessageKey::UseColoredIcon => "Use Colored Icon",
            MessageKey::EnableAutoLaunch => "Enable Auto Launch",
            MessageKey::Quit => "Quit",
            MessageKey::Language => "Language",
            MessageKey::English => "English",
            MessageKey::Russian => "Russian",
        },
        Language::Ru => match key {
            MessageKey::Title => "YaHomie",
            MessageKey::ToggleApp => "Открыть",
            MessageKey::Refresh => "Обновить страницу",
            MessageKey::UseColoredIcon => "Цветная иконка",
            MessageKey::EnableAutoLaunch => "Автозапуск",
            MessageKey::Quit => "Выход",
            MessageKey::Language => "Язык",
            MessageKey::English => "Английский",
            MessageKey::Russian => "Русский",
        },
    }
}
