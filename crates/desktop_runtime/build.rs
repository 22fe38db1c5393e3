use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_FILE: &str = "desktop.manifest.toml";
const CSS_LENGTH_UNITS: [&str; 5] = ["px", "%", "vw", "vh", "rem"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeometryManifest {
    left: String,
    top: String,
    width: String,
    height: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    app: String,
    title: String,
    launcher_label: String,
    glyph: String,
    geometry: GeometryManifest,
    #[serde(default)]
    open_on_boot: bool,
    body: toml::Value,
}

#[derive(Debug, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    windows: Vec<WindowManifest>,
}

fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    if value.starts_with("calc(") && value.ends_with(')') {
        return true;
    }
    CSS_LENGTH_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .is_some_and(|number| !number.is_empty() && number.parse::<f64>().is_ok())
    })
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(MANIFEST_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = HashSet::new();
    for window in &manifest.windows {
        if window.app.trim().is_empty() || window.app.contains(char::is_whitespace) {
            panic!("invalid app name `{}` in {}", window.app, path.display());
        }
        if !seen.insert(window.app.clone()) {
            panic!("duplicate app `{}` in {}", window.app, path.display());
        }
        let geometry = &window.geometry;
        for (field, value) in [
            ("left", &geometry.left),
            ("top", &geometry.top),
            ("width", &geometry.width),
            ("height", &geometry.height),
        ] {
            if !is_css_length(value) {
                panic!(
                    "window `{}` has invalid {field} `{value}` in {}",
                    window.app,
                    path.display()
                );
            }
        }
    }

    let json =
        serde_json::to_string_pretty(&manifest.windows).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
