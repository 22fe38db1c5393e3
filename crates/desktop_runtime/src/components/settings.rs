use super::*;
use crate::{
    appearance::{speed_readout, theme_option_border, SettingsPalette},
    model::{DockPosition, WindowStyle},
    themes::builtin_themes,
};

const SPEED_MIN_MS: u32 = 100;
const SPEED_MAX_MS: u32 = 1000;
const SPEED_STEP_MS: u32 = 50;

#[component]
pub(super) fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let appearance = create_memo(move |_| state.with(|state| state.appearance.clone()));
    let palette = move || appearance.with(|appearance| SettingsPalette::for_mode(appearance.dark_mode));

    let theme_options = builtin_themes()
        .iter()
        .map(|theme| {
            let selected = move || {
                appearance.with(|appearance| appearance.theme.as_deref() == Some(theme.id))
            };
            view! {
                <button
                    class="color-option"
                    data-theme=theme.id
                    title=theme.label
                    style=move || {
                        format!(
                            "background:{};border:{};",
                            theme.gradient,
                            theme_option_border(selected())
                        )
                    }
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::ApplyTheme {
                            name: theme.id.to_string(),
                        })
                    }
                ></button>
            }
        })
        .collect_view();

    let mode_buttons = [(false, "light", "Light"), (true, "dark", "Dark")]
        .into_iter()
        .map(|(is_dark, mode, label)| {
            view! {
                <button
                    class="mode-btn"
                    data-mode=mode
                    style=move || {
                        let dark_mode = appearance.with(|appearance| appearance.dark_mode);
                        palette().mode_button(is_dark, dark_mode).inline_style()
                    }
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetDarkMode { enabled: is_dark })
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let style_options = WindowStyle::ALL
        .into_iter()
        .map(|style| {
            view! {
                <option
                    value=style.as_str()
                    selected=move || appearance.with(|appearance| appearance.window_style == style)
                >
                    {style.label()}
                </option>
            }
        })
        .collect_view();

    let dock_buttons = DockPosition::ALL
        .into_iter()
        .map(|position| {
            view! {
                <button
                    class="dock-position-btn"
                    data-position=position.as_str()
                    style=move || {
                        let current = appearance.with(|appearance| appearance.dock_position);
                        palette().dock_button(position, current).inline_style()
                    }
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetDockPosition { position })
                    }
                >
                    {position.label()}
                </button>
            }
        })
        .collect_view();

    let on_style_change = move |ev: web_sys::Event| match event_target_value(&ev).parse() {
        Ok(style) => runtime.dispatch_action(DesktopAction::SetWindowStyle { style }),
        Err(err) => logging::warn!("window style select: {err}"),
    };
    let on_speed_input = move |ev: web_sys::Event| {
        if let Ok(speed_ms) = event_target_value(&ev).parse::<u32>() {
            runtime.dispatch_action(DesktopAction::SetAnimationSpeed { speed_ms });
        }
    };
    let speed = move || appearance.with(|appearance| appearance.displayed_animation_speed_ms());

    view! {
        <div class="settings-panel">
            <section class="settings-group">
                <h3>"Background"</h3>
                <div class="color-options">{theme_options}</div>
            </section>
            <section class="settings-group">
                <h3>"Appearance"</h3>
                <div class="mode-options">{mode_buttons}</div>
            </section>
            <section class="settings-group">
                <label for="window-style-select">"Window style"</label>
                <select
                    id="window-style-select"
                    style=move || palette().select.inline_style()
                    on:change=on_style_change
                >
                    {style_options}
                </select>
            </section>
            <section class="settings-group">
                <h3>"Dock position"</h3>
                <div class="dock-position-options">{dock_buttons}</div>
            </section>
            <section class="settings-group">
                <label for="animation-speed">"Animation speed"</label>
                <input
                    type="range"
                    id="animation-speed"
                    min=SPEED_MIN_MS
                    max=SPEED_MAX_MS
                    step=SPEED_STEP_MS
                    prop:value=move || speed().to_string()
                    style=move || {
                        let background = palette().slider_background;
                        if background.is_empty() {
                            String::new()
                        } else {
                            format!("background:{background};")
                        }
                    }
                    on:input=on_speed_input
                />
                <span id="speed-value">{move || speed_readout(speed())}</span>
            </section>
        </div>
    }
}
