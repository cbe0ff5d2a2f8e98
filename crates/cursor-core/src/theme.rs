use crate::constants::THEME_STORAGE_KEY;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ThemeParseError(pub String);

impl Theme {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Key-value persistence for display preferences (browser local storage on
/// the web).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    /// Returns false when the value could not be persisted.
    fn save(&mut self, key: &str, value: &str) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Resolve the starting theme: stored value, then the system preference,
    /// then light.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let stored = store.load(THEME_STORAGE_KEY).and_then(|raw| {
            raw.parse::<Theme>()
                .map_err(|e| log::warn!("[theme] ignoring stored value: {}", e))
                .ok()
        });
        let theme = stored.unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        Self { store, theme }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if !self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not persist {}", theme);
        }
        log::debug!("[theme] now {}", theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }
}
