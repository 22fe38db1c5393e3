//! Preference keys plus boot hydration and per-key persistence over a [`PrefsStore`].

use leptos::logging;
use platform_host::{load_pref_parsed_with, save_pref_display_with, PrefsStore};

use crate::model::{AppearanceState, DockPosition, PreferenceSnapshot, WindowStyle};

pub const THEME_KEY: &str = "portfolio-theme";
pub const DARK_MODE_KEY: &str = "dark-mode";
pub const WINDOW_STYLE_KEY: &str = "window-style";
pub const DOCK_POSITION_KEY: &str = "dock-position";
pub const ANIMATION_SPEED_KEY: &str = "animation-speed";

/// Individually persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    DarkMode,
    WindowStyle,
    DockPosition,
    AnimationSpeed,
}

impl PreferenceKey {
    pub const ALL: [Self; 5] = [
        Self::Theme,
        Self::DarkMode,
        Self::WindowStyle,
        Self::DockPosition,
        Self::AnimationSpeed,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Theme => THEME_KEY,
            Self::DarkMode => DARK_MODE_KEY,
            Self::WindowStyle => WINDOW_STYLE_KEY,
            Self::DockPosition => DOCK_POSITION_KEY,
            Self::AnimationSpeed => ANIMATION_SPEED_KEY,
        }
    }
}

fn load_logged<T>(store: &dyn PrefsStore, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match load_pref_parsed_with::<_, T>(store, key) {
        Ok(value) => value,
        Err(err) => {
            logging::warn!("load preference `{key}` failed: {err}");
            None
        }
    }
}

/// Reads every persisted preference; missing or unparsable values fall back to defaults.
pub fn load_preferences(store: &dyn PrefsStore) -> PreferenceSnapshot {
    let theme = match store.load_pref(THEME_KEY) {
        Ok(theme) => theme.filter(|name| !name.trim().is_empty()),
        Err(err) => {
            logging::warn!("load preference `{THEME_KEY}` failed: {err}");
            None
        }
    };

    PreferenceSnapshot {
        dark_mode: load_logged::<bool>(store, DARK_MODE_KEY).unwrap_or(false),
        window_style: load_logged::<WindowStyle>(store, WINDOW_STYLE_KEY).unwrap_or_default(),
        dock_position: load_logged::<DockPosition>(store, DOCK_POSITION_KEY).unwrap_or_default(),
        animation_speed_ms: load_logged::<u32>(store, ANIMATION_SPEED_KEY),
        theme,
    }
}

/// Writes the current value of `key` from `appearance`.
///
/// Unset optional values (no theme chosen, stylesheet speed) are not written.
///
/// # Errors
///
/// Returns the store's error string when the write fails.
pub fn persist_preference(
    store: &dyn PrefsStore,
    key: PreferenceKey,
    appearance: &AppearanceState,
) -> Result<(), String> {
    let storage_key = key.storage_key();
    match key {
        PreferenceKey::Theme => match appearance.theme.as_deref() {
            Some(theme) => save_pref_display_with(store, storage_key, theme),
            None => Ok(()),
        },
        PreferenceKey::DarkMode => save_pref_display_with(store, storage_key, &appearance.dark_mode),
        PreferenceKey::WindowStyle => {
            save_pref_display_with(store, storage_key, &appearance.window_style)
        }
        PreferenceKey::DockPosition => {
            save_pref_display_with(store, storage_key, &appearance.dock_position)
        }
        PreferenceKey::AnimationSpeed => match appearance.animation_speed_ms {
            Some(speed) => save_pref_display_with(store, storage_key, &speed),
            None => Ok(()),
        },
    }
}
