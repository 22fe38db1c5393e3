use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// First z-index handed out; the counter is pre-incremented on every activation.
pub const INITIAL_Z_INDEX: u32 = 100;
/// Slider position shown when no animation speed has been chosen yet.
pub const DEFAULT_ANIMATION_SPEED_MS: u32 = 300;

const WINDOW_ID_SUFFIX: &str = "-window";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    /// Window id that launcher `app_name` resolves to (`<app>-window`).
    pub fn for_app(app_name: &str) -> Self {
        Self(format!("{app_name}{WINDOW_ID_SUFFIX}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// App name encoded in the id, or the raw id when it carries no `-window` suffix.
    pub fn app_name(&self) -> &str {
        self.0.strip_suffix(WINDOW_ID_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Window geometry as CSS length strings, written verbatim to the element's inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
}

impl WindowGeometry {
    pub fn from_px(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left: px(left),
            top: px(top),
            width: px(width),
            height: px(height),
        }
    }
}

pub fn px(value: i32) -> String {
    format!("{value}px")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowVisibility {
    Visible,
    /// Shrink animation in flight; becomes [`WindowVisibility::Hidden`] when it completes.
    Minimized,
    #[default]
    Hidden,
}

impl WindowVisibility {
    /// Whether the element is laid out (`display: flex`) rather than `display: none`.
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Corner the minimize animation converges toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimizeOrigin {
    BottomCenter,
    LeftCenter,
    RightCenter,
}

impl MinimizeOrigin {
    pub fn for_dock(position: DockPosition) -> Self {
        match position {
            DockPosition::Bottom => Self::BottomCenter,
            DockPosition::Left => Self::LeftCenter,
            DockPosition::Right => Self::RightCenter,
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Self::BottomCenter => "bottom center",
            Self::LeftCenter => "left center",
            Self::RightCenter => "right center",
        }
    }
}

/// Entrance animation phase. Opening resets to `Reset` (`animation: none`) and a short timer
/// moves it to `Playing` so the browser treats the bounce as a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntrancePhase {
    #[default]
    Idle,
    Reset,
    Playing,
}

impl EntrancePhase {
    pub fn css_animation(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Reset => Some("none"),
            Self::Playing => Some("bounce 0.5s ease"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_name: String,
    pub title: String,
    pub geometry: WindowGeometry,
    /// Geometry captured when the window was maximized.
    pub saved_geometry: Option<WindowGeometry>,
    /// `0` until the window is first activated.
    pub z_index: u32,
    pub visibility: WindowVisibility,
    pub maximized: bool,
    pub is_active: bool,
    pub minimize_origin: Option<MinimizeOrigin>,
    pub minimize_token: u64,
    pub entrance: EntrancePhase,
    pub entrance_token: u64,
    pub dragging: bool,
}

impl WindowRecord {
    pub fn new(app_name: &str, title: &str, geometry: WindowGeometry) -> Self {
        Self {
            id: WindowId::for_app(app_name),
            app_name: app_name.to_string(),
            title: title.to_string(),
            geometry,
            saved_geometry: None,
            z_index: 0,
            visibility: WindowVisibility::Hidden,
            maximized: false,
            is_active: false,
            minimize_origin: None,
            minimize_token: 0,
            entrance: EntrancePhase::Idle,
            entrance_token: 0,
            dragging: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockLauncher {
    pub app_name: String,
    pub label: String,
    pub glyph: String,
    /// Mirrors whether the launcher's window is currently open.
    pub is_active: bool,
}

/// Error returned when parsing an unknown style or dock position token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStyle {
    #[default]
    Classic,
    Flat,
    Neumorphic,
    Glassmorphic,
}

impl WindowStyle {
    pub const ALL: [Self; 4] = [
        Self::Classic,
        Self::Flat,
        Self::Neumorphic,
        Self::Glassmorphic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Flat => "flat",
            Self::Neumorphic => "neumorphic",
            Self::Glassmorphic => "glassmorphic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Flat => "Flat",
            Self::Neumorphic => "Neumorphic",
            Self::Glassmorphic => "Glassmorphic",
        }
    }

    /// Root class marker, e.g. `style-glassmorphic`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Classic => "style-classic",
            Self::Flat => "style-flat",
            Self::Neumorphic => "style-neumorphic",
            Self::Glassmorphic => "style-glassmorphic",
        }
    }
}

impl fmt::Display for WindowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    #[default]
    Bottom,
    Left,
    Right,
}

impl DockPosition {
    pub const ALL: [Self; 3] = [Self::Bottom, Self::Left, Self::Right];

    /// Class marker carried by the dock container.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for DockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockPosition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Persisted look-and-feel preferences plus the root background they drive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppearanceState {
    pub dark_mode: bool,
    pub window_style: WindowStyle,
    pub dock_position: DockPosition,
    /// `None` leaves the stylesheet's transition speed in place.
    pub animation_speed_ms: Option<u32>,
    /// Inline root background; `None` means the stylesheet default.
    pub background: Option<String>,
    pub theme: Option<String>,
}

impl AppearanceState {
    pub fn displayed_animation_speed_ms(&self) -> u32 {
        self.animation_speed_ms.unwrap_or(DEFAULT_ANIMATION_SPEED_MS)
    }
}

/// Values read back from the preference store at boot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    pub dark_mode: bool,
    pub window_style: WindowStyle,
    pub dock_position: DockPosition,
    pub animation_speed_ms: Option<u32>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub launchers: Vec<DockLauncher>,
    /// Shared monotonic z-index counter.
    pub z_index_counter: u32,
    pub appearance: AppearanceState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            launchers: Vec::new(),
            z_index_counter: INITIAL_Z_INDEX,
            appearance: AppearanceState::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.is_active)
            .map(|w| w.id.clone())
    }

    pub fn launcher(&self, app_name: &str) -> Option<&DockLauncher> {
        self.launchers.iter().find(|l| l.app_name == app_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus the window's offset at gesture start.
    pub grab_offset: PointerPosition,
    /// Rendered window size measured at gesture start.
    pub window_size: ElementSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
