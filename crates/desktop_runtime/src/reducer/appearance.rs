//! Reducer helpers for theme, dark mode, window style, dock and animation-speed transitions.

use crate::{
    appearance::{needs_glass_backdrop, GLASS_BACKDROP},
    model::{AppearanceState, DesktopState, PreferenceSnapshot, WindowStyle},
    persistence::PreferenceKey,
    reducer::{DesktopAction, RuntimeEffect},
    themes,
};

/// Applies a registered theme; unknown names leave `appearance` untouched and return `false`.
fn apply_theme(appearance: &mut AppearanceState, name: &str) -> bool {
    let Some(theme) = themes::theme_by_id(name.trim()) else {
        return false;
    };
    appearance.background = Some(theme.gradient.to_string());
    appearance.theme = Some(theme.id.to_string());
    true
}

fn apply_window_style(appearance: &mut AppearanceState, style: WindowStyle) {
    appearance.window_style = style;
    if style == WindowStyle::Glassmorphic && needs_glass_backdrop(appearance.background.as_deref())
    {
        appearance.background = Some(GLASS_BACKDROP.to_string());
    }
}

fn hydrate(appearance: &mut AppearanceState, snapshot: PreferenceSnapshot) {
    appearance.dark_mode = snapshot.dark_mode;
    apply_window_style(appearance, snapshot.window_style);
    appearance.dock_position = snapshot.dock_position;
    if snapshot.animation_speed_ms.is_some() {
        appearance.animation_speed_ms = snapshot.animation_speed_ms;
    }
    if let Some(theme) = snapshot.theme {
        apply_theme(appearance, &theme);
    }
}

pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    let appearance = &mut state.appearance;
    match action {
        DesktopAction::ApplyTheme { name } => {
            if apply_theme(appearance, &name) {
                effects.push(RuntimeEffect::PersistPreference(PreferenceKey::Theme));
            }
        }
        DesktopAction::SetDarkMode { enabled } => {
            appearance.dark_mode = enabled;
            effects.push(RuntimeEffect::PersistPreference(PreferenceKey::DarkMode));
        }
        DesktopAction::ToggleDarkMode => {
            appearance.dark_mode = !appearance.dark_mode;
            effects.push(RuntimeEffect::PersistPreference(PreferenceKey::DarkMode));
        }
        DesktopAction::SetWindowStyle { style } => {
            apply_window_style(appearance, style);
            effects.push(RuntimeEffect::PersistPreference(PreferenceKey::WindowStyle));
        }
        DesktopAction::SetDockPosition { position } => {
            appearance.dock_position = position;
            effects.push(RuntimeEffect::PersistPreference(PreferenceKey::DockPosition));
        }
        DesktopAction::SetAnimationSpeed { speed_ms } => {
            appearance.animation_speed_ms = Some(speed_ms);
            effects.push(RuntimeEffect::PersistPreference(
                PreferenceKey::AnimationSpeed,
            ));
        }
        DesktopAction::HydratePreferences { snapshot } => hydrate(appearance, snapshot),
        _ => {}
    }
}
