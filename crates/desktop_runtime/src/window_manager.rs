//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{px, DesktopState, ElementSize, PointerPosition, WindowGeometry, WindowId};

/// Delay between resetting and re-applying the entrance animation.
pub const ENTRANCE_REPLAY_DELAY_MS: u32 = 10;
/// Length of the minimize shrink transition; visibility flips to hidden afterwards.
pub const MINIMIZE_DURATION_MS: u32 = 300;
/// Transition applied while a window shrinks toward the dock.
pub const MINIMIZE_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

/// Pixel bands reserved by the menu bar and dock chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    /// Smallest `top` a dragged window may take (menu bar height).
    pub drag_min_top: i32,
    /// Space kept free below a dragged window.
    pub drag_bottom_reserve: i32,
    /// Left/right margin of a maximized window.
    pub maximize_side_inset: i32,
    /// `top` of a maximized window.
    pub maximize_top: i32,
    /// Combined top and bottom space a maximized window leaves free.
    pub maximize_vertical_reserve: i32,
}

pub const DEFAULT_CHROME: ChromeLayout = ChromeLayout {
    drag_min_top: 24,
    drag_bottom_reserve: 60,
    maximize_side_inset: 10,
    maximize_top: 34,
    maximize_vertical_reserve: 104,
};

impl Default for ChromeLayout {
    fn default() -> Self {
        DEFAULT_CHROME
    }
}

impl ChromeLayout {
    /// Geometry of a maximized window: full viewport minus the chrome bands.
    pub fn maximized_geometry(&self) -> WindowGeometry {
        WindowGeometry {
            left: px(self.maximize_side_inset),
            top: px(self.maximize_top),
            width: format!("calc(100vw - {}px)", self.maximize_side_inset * 2),
            height: format!("calc(100vh - {}px)", self.maximize_vertical_reserve),
        }
    }

    /// Clamps a desired window origin so the window stays inside the viewport.
    ///
    /// When a band is empty (window larger than the viewport) the lower bound wins.
    pub fn clamp_drag_origin(
        &self,
        desired: PointerPosition,
        window: ElementSize,
        viewport: ElementSize,
    ) -> PointerPosition {
        let max_x = viewport.width - window.width;
        let max_y = viewport.height - window.height - self.drag_bottom_reserve;
        PointerPosition {
            x: desired.x.min(max_x).max(0),
            y: desired.y.min(max_y).max(self.drag_min_top),
        }
    }
}

/// Marks `window_id` as the only active window and raises it above every earlier activation.
///
/// Returns the assigned z-index, or `None` when the window does not exist.
pub fn activate_window_internal(state: &mut DesktopState, window_id: &WindowId) -> Option<u32> {
    let index = state.windows.iter().position(|w| &w.id == window_id)?;
    for window in &mut state.windows {
        window.is_active = false;
    }
    state.z_index_counter = state.z_index_counter.saturating_add(1);
    let window = &mut state.windows[index];
    window.is_active = true;
    window.z_index = state.z_index_counter;
    Some(window.z_index)
}

/// Sets the active flag of the launcher for `app_name`, if one exists.
pub fn set_launcher_active(state: &mut DesktopState, app_name: &str, active: bool) {
    for launcher in state
        .launchers
        .iter_mut()
        .filter(|launcher| launcher.app_name == app_name)
    {
        launcher.is_active = active;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRecord;

    fn size(width: i32, height: i32) -> ElementSize {
        ElementSize { width, height }
    }

    #[test]
    fn maximized_geometry_uses_chrome_insets() {
        assert_eq!(
            DEFAULT_CHROME.maximized_geometry(),
            WindowGeometry {
                left: "10px".to_string(),
                top: "34px".to_string(),
                width: "calc(100vw - 20px)".to_string(),
                height: "calc(100vh - 104px)".to_string(),
            }
        );
    }

    #[test]
    fn clamp_keeps_window_inside_viewport_bands() {
        let viewport = size(1280, 800);
        let window = size(400, 300);
        let cases = [
            (PointerPosition { x: -50, y: -50 }, PointerPosition { x: 0, y: 24 }),
            (PointerPosition { x: 5000, y: 5000 }, PointerPosition { x: 880, y: 440 }),
            (PointerPosition { x: 200, y: 100 }, PointerPosition { x: 200, y: 100 }),
            (PointerPosition { x: 880, y: 24 }, PointerPosition { x: 880, y: 24 }),
        ];
        for (desired, expected) in cases {
            assert_eq!(
                DEFAULT_CHROME.clamp_drag_origin(desired, window, viewport),
                expected
            );
        }
    }

    #[test]
    fn clamp_holds_bounds_over_a_sweep_of_deltas() {
        let viewport = size(1024, 768);
        let window = size(300, 200);
        for dx in (-2000..2000).step_by(37) {
            for dy in (-2000..2000).step_by(41) {
                let clamped = DEFAULT_CHROME.clamp_drag_origin(
                    PointerPosition { x: 100 + dx, y: 100 + dy },
                    window,
                    viewport,
                );
                assert!(clamped.x >= 0 && clamped.x <= viewport.width - window.width);
                assert!(
                    clamped.y >= 24 && clamped.y <= viewport.height - window.height - 60
                );
            }
        }
    }

    #[test]
    fn clamp_prefers_lower_bound_when_window_exceeds_viewport() {
        let clamped = DEFAULT_CHROME.clamp_drag_origin(
            PointerPosition { x: 300, y: 300 },
            size(900, 700),
            size(640, 480),
        );
        assert_eq!(clamped, PointerPosition { x: 0, y: 24 });
    }

    #[test]
    fn activation_raises_counter_and_moves_active_flag() {
        let mut state = DesktopState::default();
        for app in ["about", "terminal"] {
            state.windows.push(WindowRecord::new(
                app,
                app,
                WindowGeometry::from_px(0, 0, 100, 100),
            ));
        }

        let first = activate_window_internal(&mut state, &WindowId::for_app("about"));
        let second = activate_window_internal(&mut state, &WindowId::for_app("terminal"));

        assert_eq!(first, Some(101));
        assert_eq!(second, Some(102));
        assert_eq!(state.active_window_id(), Some(WindowId::for_app("terminal")));
        assert_eq!(state.windows.iter().filter(|w| w.is_active).count(), 1);
        assert_eq!(
            activate_window_internal(&mut state, &WindowId::for_app("missing")),
            None
        );
        assert_eq!(state.z_index_counter, 102);
    }
}
