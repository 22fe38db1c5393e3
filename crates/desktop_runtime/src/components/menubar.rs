use std::time::Duration;

use platform_host::{local_clock_now, ClockReading};

use super::*;
use crate::appearance::SettingsPalette;

/// Formats a clock reading as `h:mm AM|PM` (12-hour, midnight and noon render as 12).
pub(super) fn format_clock_time(reading: ClockReading) -> String {
    let suffix = if reading.hour >= 12 { "PM" } else { "AM" };
    let hour = match reading.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour}:{:02} {suffix}", reading.minute)
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(local_clock_now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(local_clock_now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let theme_icon = move || {
        state.with(|state| SettingsPalette::for_mode(state.appearance.dark_mode).theme_icon)
    };
    let active_title = move || {
        state.with(|state| {
            state
                .windows
                .iter()
                .find(|win| win.is_active)
                .map(|win| win.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <header class="menu-bar">
            <div class="menu-bar-left">
                <span class="menu-bar-brand">"Portfolio"</span>
                <span class="menu-bar-active-title">{active_title}</span>
            </div>
            <div class="menu-bar-right">
                <button
                    id="theme-toggle"
                    aria-label="Toggle dark mode"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleDarkMode)
                >
                    <span id="theme-icon">{theme_icon}</span>
                </button>
                <span id="clock">{move || format_clock_time(clock_now.get())}</span>
            </div>
        </header>
    }
}
