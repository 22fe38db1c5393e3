//! Pre-declared window catalog compiled from `desktop.manifest.toml`.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::model::{DesktopState, DockLauncher, WindowGeometry, WindowRecord};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub heading: String,
    pub body: String,
    /// Rendered with the `lazy-load` marker and revealed on first intersection.
    #[serde(default)]
    pub lazy: bool,
}

/// Content rendered inside a window body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowBody {
    Document { sections: Vec<DocumentSection> },
    Terminal { lines: Vec<String> },
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManifest {
    pub app: String,
    pub title: String,
    pub launcher_label: String,
    pub glyph: String,
    pub geometry: WindowGeometry,
    #[serde(default)]
    pub open_on_boot: bool,
    pub body: WindowBody,
}

fn parse_catalog(raw: &str) -> Vec<WindowManifest> {
    match serde_json::from_str(raw) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("window catalog parse failed: {err}");
            Vec::new()
        }
    }
}

pub fn window_catalog() -> &'static [WindowManifest] {
    static CATALOG: OnceLock<Vec<WindowManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| parse_catalog(WINDOW_CATALOG_JSON))
}

pub fn window_manifest(app_name: &str) -> Option<&'static WindowManifest> {
    window_catalog().iter().find(|entry| entry.app == app_name)
}

/// Apps whose windows open once preferences are hydrated.
pub fn boot_apps() -> impl Iterator<Item = &'static str> {
    window_catalog()
        .iter()
        .filter(|entry| entry.open_on_boot)
        .map(|entry| entry.app.as_str())
}

/// Builds the boot state from `catalog`: every window hidden, every launcher inactive.
pub fn desktop_state_from_catalog(catalog: &[WindowManifest]) -> DesktopState {
    let mut state = DesktopState::default();
    for entry in catalog {
        state.windows.push(WindowRecord::new(
            &entry.app,
            &entry.title,
            entry.geometry.clone(),
        ));
        state.launchers.push(DockLauncher {
            app_name: entry.app.clone(),
            label: entry.launcher_label.clone(),
            glyph: entry.glyph.clone(),
            is_active: false,
        });
    }
    state
}

pub fn initial_desktop_state() -> DesktopState {
    desktop_state_from_catalog(window_catalog())
}
