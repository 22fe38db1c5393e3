//! Pure derivations from [`AppearanceState`] to document-level markers and control colors.
//!
//! Every render derives the full set from the current state in one pass, so the document and
//! the settings controls never show a mix of light and dark values.

use crate::model::{AppearanceState, DockPosition, WindowStyle};

/// Vivid backdrop forced under the glassmorphic style.
pub const GLASS_BACKDROP: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
/// Color fragment identifying [`GLASS_BACKDROP`] (and the stylesheet's default backdrop).
const GLASS_BACKDROP_MARKER: &str = "667eea";
pub const ACCENT_FILL: &str = "var(--accent-color)";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TRANSITION_SPEED_PROPERTY: &str = "--transition-speed";

/// Whether applying the glassmorphic style should replace `background` with the glass backdrop.
pub fn needs_glass_backdrop(background: Option<&str>) -> bool {
    match background {
        None => true,
        Some(value) => value.trim().is_empty() || value.contains(GLASS_BACKDROP_MARKER),
    }
}

/// Document-level markers derived from the appearance state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAppearance {
    /// Class carried by the document root (`style-<name>`).
    pub root_style_class: &'static str,
    /// Whether `<body>` carries the `dark-mode` class.
    pub body_dark_mode: bool,
    /// Inline background on `<body>`; `None` clears it.
    pub body_background: Option<String>,
    /// Value for `--transition-speed` on the root; `None` removes the override.
    pub transition_speed: Option<String>,
}

impl DocumentAppearance {
    /// Every root style class that must be removed before applying `root_style_class`.
    pub fn all_root_style_classes() -> [&'static str; 4] {
        WindowStyle::ALL.map(WindowStyle::css_class)
    }
}

pub fn document_appearance(appearance: &AppearanceState) -> DocumentAppearance {
    DocumentAppearance {
        root_style_class: appearance.window_style.css_class(),
        body_dark_mode: appearance.dark_mode,
        body_background: appearance.background.clone(),
        transition_speed: appearance.animation_speed_ms.map(speed_readout),
    }
}

/// Readout text and CSS duration for an animation speed, e.g. `300ms`.
pub fn speed_readout(speed_ms: u32) -> String {
    format!("{speed_ms}ms")
}

/// Background/text/border triple for one settings control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlColors {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

impl ControlColors {
    pub fn inline_style(self) -> String {
        format!(
            "background:{};color:{};border-color:{};",
            self.background, self.color, self.border
        )
    }
}

/// Secondary palette for the settings controls and the menu-bar mode icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPalette {
    pub theme_icon: &'static str,
    pub select: ControlColors,
    /// Empty string falls back to the stylesheet.
    pub slider_background: &'static str,
    pub selected_button: ControlColors,
    pub unselected_button: ControlColors,
}

impl SettingsPalette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            let neutral = ControlColors {
                background: "#2a2a2a",
                color: "#fff",
                border: "#555",
            };
            Self {
                theme_icon: "🌙",
                select: neutral,
                slider_background: "#2a2a2a",
                selected_button: ControlColors {
                    background: ACCENT_FILL,
                    color: "white",
                    border: "#555",
                },
                unselected_button: neutral,
            }
        } else {
            let neutral = ControlColors {
                background: "white",
                color: "black",
                border: "#ccc",
            };
            Self {
                theme_icon: "☀️",
                select: neutral,
                slider_background: "",
                selected_button: ControlColors {
                    background: ACCENT_FILL,
                    color: "white",
                    border: "#ccc",
                },
                unselected_button: neutral,
            }
        }
    }

    pub fn button(&self, selected: bool) -> ControlColors {
        if selected {
            self.selected_button
        } else {
            self.unselected_button
        }
    }

    /// Colors for a light/dark mode button.
    pub fn mode_button(&self, button_is_dark: bool, dark_mode: bool) -> ControlColors {
        self.button(button_is_dark == dark_mode)
    }

    /// Colors for a dock position button.
    pub fn dock_button(&self, button: DockPosition, current: DockPosition) -> ControlColors {
        self.button(button == current)
    }
}

/// Border of a theme swatch; exactly one swatch carries the accent border.
pub fn theme_option_border(selected: bool) -> &'static str {
    if selected {
        "2px solid var(--accent-color)"
    } else {
        "2px solid transparent"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glass_backdrop_only_replaces_default_backgrounds() {
        assert!(needs_glass_backdrop(None));
        assert!(needs_glass_backdrop(Some("")));
        assert!(needs_glass_backdrop(Some(GLASS_BACKDROP)));
        assert!(!needs_glass_backdrop(Some(
            "linear-gradient(135deg, #70e1f5 0%, #ffd194 100%)"
        )));
    }

    #[test]
    fn document_appearance_reflects_every_preference() {
        let appearance = AppearanceState {
            dark_mode: true,
            window_style: WindowStyle::Flat,
            dock_position: DockPosition::Right,
            animation_speed_ms: Some(450),
            background: Some("black".to_string()),
            theme: None,
        };

        assert_eq!(
            document_appearance(&appearance),
            DocumentAppearance {
                root_style_class: "style-flat",
                body_dark_mode: true,
                body_background: Some("black".to_string()),
                transition_speed: Some("450ms".to_string()),
            }
        );
        assert_eq!(
            DocumentAppearance::all_root_style_classes(),
            [
                "style-classic",
                "style-flat",
                "style-neumorphic",
                "style-glassmorphic"
            ]
        );
    }

    #[test]
    fn palette_switches_every_control_with_the_mode() {
        let light = SettingsPalette::for_mode(false);
        let dark = SettingsPalette::for_mode(true);

        assert_eq!(light.theme_icon, "☀️");
        assert_eq!(dark.theme_icon, "🌙");
        assert_eq!(light.select.background, "white");
        assert_eq!(dark.select.background, "#2a2a2a");
        assert_eq!(dark.slider_background, "#2a2a2a");
        assert_eq!(light.slider_background, "");
        assert_eq!(dark.unselected_button.border, "#555");
        assert_eq!(light.unselected_button.border, "#ccc");
    }

    #[test]
    fn exactly_one_mode_and_dock_button_is_selected() {
        for dark_mode in [false, true] {
            let palette = SettingsPalette::for_mode(dark_mode);
            let selected = [false, true]
                .into_iter()
                .filter(|is_dark| palette.mode_button(*is_dark, dark_mode).background == ACCENT_FILL)
                .count();
            assert_eq!(selected, 1);

            for current in DockPosition::ALL {
                let highlighted = DockPosition::ALL
                    .into_iter()
                    .filter(|position| {
                        palette.dock_button(*position, current).background == ACCENT_FILL
                    })
                    .collect::<Vec<_>>();
                assert_eq!(highlighted, vec![current]);
            }
        }
    }

    #[test]
    fn control_colors_render_inline_style() {
        let colors = SettingsPalette::for_mode(false).button(true);
        assert_eq!(
            colors.inline_style(),
            "background:var(--accent-color);color:white;border-color:#ccc;"
        );
    }
}
