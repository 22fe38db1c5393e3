use leptos::{create_effect, logging, Callable, Callback};

use crate::{apps, host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let prefs = host.prefs_store();
        let snapshot = persistence::load_preferences(prefs.as_ref());
        logging::log!(
            "desktop boot: host={} style={} dock={} dark={} theme={}",
            host.host_strategy_name(),
            snapshot.window_style,
            snapshot.dock_position,
            snapshot.dark_mode,
            snapshot.theme.as_deref().unwrap_or("default"),
        );
        dispatch.call(DesktopAction::HydratePreferences { snapshot });

        for app_name in apps::boot_apps() {
            dispatch.call(DesktopAction::OpenApp {
                app_name: app_name.to_string(),
            });
        }
    });
}
