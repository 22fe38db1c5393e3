//! Global keyboard shortcuts (Ctrl or Cmd plus a letter).

use crate::reducer::DesktopAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DesktopShortcut {
    CloseActiveWindow,
    MinimizeActiveWindow,
    ToggleDarkMode,
}

impl DesktopShortcut {
    pub(super) fn action(self) -> DesktopAction {
        match self {
            Self::CloseActiveWindow => DesktopAction::CloseActiveWindow,
            Self::MinimizeActiveWindow => DesktopAction::MinimizeActiveWindow,
            Self::ToggleDarkMode => DesktopAction::ToggleDarkMode,
        }
    }

    /// Only the dark-mode toggle overrides the browser's own binding (bookmark).
    pub(super) fn suppresses_default(self) -> bool {
        matches!(self, Self::ToggleDarkMode)
    }
}

/// Maps a `keydown` key value plus modifier state to a shortcut.
pub(super) fn shortcut_from_key(key: &str, ctrl: bool, meta: bool) -> Option<DesktopShortcut> {
    if !(ctrl || meta) {
        return None;
    }
    match key {
        "w" => Some(DesktopShortcut::CloseActiveWindow),
        "m" => Some(DesktopShortcut::MinimizeActiveWindow),
        "d" => Some(DesktopShortcut::ToggleDarkMode),
        _ => None,
    }
}
