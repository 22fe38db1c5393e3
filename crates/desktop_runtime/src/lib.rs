//! Desktop-metaphor portfolio runtime: window lifecycle, appearance preferences and the Leptos
//! shell that renders them.

pub mod appearance;
pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod themes;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_preferences, persist_preference, PreferenceKey};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
