//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod appearance;

use thiserror::Error;

use crate::{
    model::{
        px, DesktopState, DockPosition, DragSession, ElementSize, EntrancePhase, InteractionState,
        MinimizeOrigin, PointerPosition, PreferenceSnapshot, WindowId, WindowRecord,
        WindowStyle, WindowVisibility,
    },
    persistence::PreferenceKey,
    window_manager::{activate_window_internal, set_launcher_active, DEFAULT_CHROME},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Show (or re-show) the window belonging to a launcher.
    OpenApp {
        /// Launcher app name; resolves to `<app_name>-window`.
        app_name: String,
    },
    /// Hide a window and deactivate its launcher.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Start the shrink-toward-dock animation for a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Timer completion for a minimize animation.
    CompleteMinimize {
        /// Window whose animation finished.
        window_id: WindowId,
        /// Minimize generation the timer was scheduled for.
        token: u64,
    },
    /// Maximize a window, or restore it when already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise a window and make it the only active one.
    ActivateWindow {
        /// Window to activate.
        window_id: WindowId,
    },
    /// Timer completion that re-applies the entrance animation.
    StartEntranceAnimation {
        /// Window being opened.
        window_id: WindowId,
        /// Entrance generation the timer was scheduled for.
        token: u64,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Rendered window offset at drag start.
        window_origin: PointerPosition,
        /// Rendered window size at drag start.
        window_size: ElementSize,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport size.
        viewport: ElementSize,
    },
    /// End the active window drag.
    EndMove,
    /// Close whichever window is active, if any.
    CloseActiveWindow,
    /// Minimize whichever window is active, if any.
    MinimizeActiveWindow,
    /// Apply a registered background theme by id.
    ApplyTheme {
        /// Theme id.
        name: String,
    },
    /// Set dark mode explicitly.
    SetDarkMode {
        /// Whether dark mode is enabled.
        enabled: bool,
    },
    /// Flip dark mode.
    ToggleDarkMode,
    /// Replace the window style.
    SetWindowStyle {
        /// New window style.
        style: WindowStyle,
    },
    /// Move the dock.
    SetDockPosition {
        /// New dock position.
        position: DockPosition,
    },
    /// Set the global transition duration.
    SetAnimationSpeed {
        /// Duration in milliseconds.
        speed_ms: u32,
    },
    /// Restore persisted preferences at boot without re-persisting them.
    HydratePreferences {
        /// Values read from the preference store.
        snapshot: PreferenceSnapshot,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host runtime to execute.
pub enum RuntimeEffect {
    /// Write one preference from the current appearance state.
    PersistPreference(PreferenceKey),
    /// Dispatch [`DesktopAction::StartEntranceAnimation`] after a short delay.
    ScheduleEntranceReplay {
        /// Window being opened.
        window_id: WindowId,
        /// Entrance generation token.
        token: u64,
    },
    /// Dispatch [`DesktopAction::CompleteMinimize`] once the shrink transition ends.
    ScheduleMinimizeCompletion {
        /// Window being minimized.
        window_id: WindowId,
        /// Minimize generation token.
        token: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// No pre-declared window exists for the launcher's app name.
    #[error("no window declared for app `{0}`")]
    UnknownApp(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window lifecycle and
/// appearance preferences. On error the state is left unchanged.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present, and [`ReducerError::UnknownApp`] when a launcher names an undeclared app.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_name } => {
            let window_id = WindowId::for_app(&app_name);
            let window = find_window_mut(state, &window_id)
                .map_err(|_| ReducerError::UnknownApp(app_name.clone()))?;
            window.visibility = WindowVisibility::Visible;
            cancel_minimize(window);
            window.entrance = EntrancePhase::Reset;
            window.entrance_token = window.entrance_token.wrapping_add(1);
            let token = window.entrance_token;
            activate_window_internal(state, &window_id);
            set_launcher_active(state, &app_name, true);
            effects.push(RuntimeEffect::ScheduleEntranceReplay { window_id, token });
        }
        DesktopAction::CloseWindow { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            end_drag_for(interaction, &window_id);
            window.visibility = WindowVisibility::Hidden;
            window.is_active = false;
            window.dragging = false;
            window.entrance = EntrancePhase::Idle;
            cancel_minimize(window);
            let app_name = window.app_name.clone();
            set_launcher_active(state, &app_name, false);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let dock = state.appearance.dock_position;
            let window = find_window_mut(state, &window_id)?;
            if window.visibility == WindowVisibility::Hidden {
                return Ok(effects);
            }
            window.visibility = WindowVisibility::Minimized;
            window.minimize_origin = Some(MinimizeOrigin::for_dock(dock));
            window.minimize_token = window.minimize_token.wrapping_add(1);
            window.entrance = EntrancePhase::Idle;
            window.dragging = false;
            let token = window.minimize_token;
            end_drag_for(interaction, &window_id);
            effects.push(RuntimeEffect::ScheduleMinimizeCompletion { window_id, token });
        }
        DesktopAction::CompleteMinimize { window_id, token } => {
            let window = find_window_mut(state, &window_id)?;
            if window.visibility == WindowVisibility::Minimized && window.minimize_token == token {
                window.visibility = WindowVisibility::Hidden;
                window.minimize_origin = None;
                window.is_active = false;
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            if window.maximized {
                if let Some(saved) = window.saved_geometry.take() {
                    window.geometry = saved;
                }
                window.maximized = false;
            } else {
                window.saved_geometry = Some(window.geometry.clone());
                window.geometry = DEFAULT_CHROME.maximized_geometry();
                window.maximized = true;
            }
        }
        DesktopAction::ActivateWindow { window_id } => {
            if activate_window_internal(state, &window_id).is_none() {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::StartEntranceAnimation { window_id, token } => {
            let window = find_window_mut(state, &window_id)?;
            if window.entrance == EntrancePhase::Reset && window.entrance_token == token {
                window.entrance = EntrancePhase::Playing;
            }
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            window_origin,
            window_size,
        } => {
            let window = find_window_mut(state, &window_id)?;
            // Maximized windows keep the session so pointer-up still ends it, but never show
            // the move cursor.
            window.dragging = !window.maximized;
            activate_window_internal(state, &window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                grab_offset: PointerPosition {
                    x: pointer.x - window_origin.x,
                    y: pointer.y - window_origin.y,
                },
                window_size,
            });
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let window = find_window_mut(state, &session.window_id)?;
                if !window.maximized {
                    let desired = PointerPosition {
                        x: pointer.x - session.grab_offset.x,
                        y: pointer.y - session.grab_offset.y,
                    };
                    let origin =
                        DEFAULT_CHROME.clamp_drag_origin(desired, session.window_size, viewport);
                    window.geometry.left = px(origin.x);
                    window.geometry.top = px(origin.y);
                }
            }
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                if let Ok(window) = find_window_mut(state, &session.window_id) {
                    window.dragging = false;
                }
            }
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(window_id) = state.active_window_id() {
                return reduce_desktop(state, interaction, DesktopAction::CloseWindow { window_id });
            }
        }
        DesktopAction::MinimizeActiveWindow => {
            if let Some(window_id) = state.active_window_id() {
                return reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeWindow { window_id },
                );
            }
        }
        action @ (DesktopAction::ApplyTheme { .. }
        | DesktopAction::SetDarkMode { .. }
        | DesktopAction::ToggleDarkMode
        | DesktopAction::SetWindowStyle { .. }
        | DesktopAction::SetDockPosition { .. }
        | DesktopAction::SetAnimationSpeed { .. }
        | DesktopAction::HydratePreferences { .. }) => {
            appearance::reduce_appearance_action(state, action, &mut effects);
        }
    }

    Ok(effects)
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

/// Invalidates any scheduled minimize completion for `window`.
fn cancel_minimize(window: &mut WindowRecord) {
    window.minimize_origin = None;
    window.minimize_token = window.minimize_token.wrapping_add(1);
}

fn end_drag_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.window_id == window_id)
    {
        interaction.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use platform_host::MemoryPrefsStore;

    use crate::{
        appearance::{document_appearance, DocumentAppearance, GLASS_BACKDROP},
        model::{DockLauncher, WindowGeometry},
        persistence::{load_preferences, DARK_MODE_KEY, DOCK_POSITION_KEY, WINDOW_STYLE_KEY},
        themes,
    };

    const APPS: [&str; 3] = ["about", "terminal", "settings"];

    fn desktop() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        for (index, app) in APPS.iter().enumerate() {
            let offset = index as i32 * 40;
            state.windows.push(WindowRecord::new(
                app,
                app,
                WindowGeometry::from_px(100 + offset, 80 + offset, 400, 300),
            ));
            state.launchers.push(DockLauncher {
                app_name: app.to_string(),
                label: app.to_string(),
                glyph: String::new(),
                is_active: false,
            });
        }
        (state, InteractionState::default())
    }

    fn run(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app: &str) {
        let effects = run(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_name: app.to_string(),
            },
        );
        for effect in effects {
            if let RuntimeEffect::ScheduleEntranceReplay { window_id, token } = effect {
                run(
                    state,
                    interaction,
                    DesktopAction::StartEntranceAnimation { window_id, token },
                );
            }
        }
    }

    fn window<'a>(state: &'a DesktopState, app: &str) -> &'a WindowRecord {
        state.window(&WindowId::for_app(app)).expect("window")
    }

    #[test]
    fn open_shows_activates_and_marks_launcher() {
        let (mut state, mut interaction) = desktop();
        let counter_before = state.z_index_counter;

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_name: "terminal".to_string(),
            },
        );

        let terminal = window(&state, "terminal");
        assert_eq!(terminal.visibility, WindowVisibility::Visible);
        assert!(terminal.is_active);
        assert_eq!(terminal.z_index, counter_before + 1);
        assert_eq!(terminal.entrance, EntrancePhase::Reset);
        assert_eq!(state.launcher("terminal").map(|l| l.is_active), Some(true));
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleEntranceReplay {
                window_id: WindowId::for_app("terminal"),
                token: terminal.entrance_token,
            }]
        );

        let stale_token = window(&state, "terminal").entrance_token - 1;
        run(
            &mut state,
            &mut interaction,
            DesktopAction::StartEntranceAnimation {
                window_id: WindowId::for_app("terminal"),
                token: stale_token,
            },
        );
        assert_eq!(window(&state, "terminal").entrance, EntrancePhase::Reset);

        let token = stale_token + 1;
        run(
            &mut state,
            &mut interaction,
            DesktopAction::StartEntranceAnimation {
                window_id: WindowId::for_app("terminal"),
                token,
            },
        );
        assert_eq!(window(&state, "terminal").entrance, EntrancePhase::Playing);
    }

    #[test]
    fn open_unknown_app_is_an_error_without_changes() {
        let (mut state, mut interaction) = desktop();
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_name: "solitaire".to_string(),
            },
        );

        assert_eq!(result, Err(ReducerError::UnknownApp("solitaire".to_string())));
        assert_eq!(state, before);
    }

    #[test]
    fn last_activated_window_is_topmost_and_only_active() {
        let (mut state, mut interaction) = desktop();
        let sequence = [
            "about", "terminal", "about", "settings", "settings", "terminal", "about",
        ];
        let mut previous = Vec::new();

        for app in sequence {
            run(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateWindow {
                    window_id: WindowId::for_app(app),
                },
            );
            let z = window(&state, app).z_index;
            assert!(previous.iter().all(|earlier| z > *earlier));
            previous.push(z);
            assert_eq!(state.windows.iter().filter(|w| w.is_active).count(), 1);
            assert_eq!(state.active_window_id(), Some(WindowId::for_app(app)));
        }
    }

    #[test]
    fn activate_missing_window_reports_not_found() {
        let (mut state, mut interaction) = desktop();
        let missing = WindowId("ghost".to_string());

        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateWindow {
                    window_id: missing.clone()
                },
            ),
            Err(ReducerError::WindowNotFound(missing))
        );
        assert_eq!(state.z_index_counter, crate::model::INITIAL_Z_INDEX);
    }

    #[test]
    fn maximize_then_restore_returns_identical_geometry() {
        let starting_geometries = [
            WindowGeometry::from_px(100, 80, 400, 300),
            WindowGeometry {
                left: "12%".to_string(),
                top: "calc(50vh - 150px)".to_string(),
                width: "40vw".to_string(),
                height: "20rem".to_string(),
            },
            WindowGeometry::from_px(0, 24, 1, 1),
        ];

        for starting in starting_geometries {
            let (mut state, mut interaction) = desktop();
            let window_id = WindowId::for_app("about");
            state.windows[0].geometry = starting.clone();

            run(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    window_id: window_id.clone(),
                },
            );
            let maximized = window(&state, "about");
            assert!(maximized.maximized);
            assert_eq!(maximized.geometry, DEFAULT_CHROME.maximized_geometry());
            assert_eq!(maximized.saved_geometry.as_ref(), Some(&starting));

            run(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize { window_id },
            );
            let restored = window(&state, "about");
            assert!(!restored.maximized);
            assert_eq!(restored.geometry, starting);
            assert_eq!(restored.saved_geometry, None);
        }
    }

    #[test]
    fn maximize_restores_the_geometry_left_by_a_drag() {
        let (mut state, mut interaction) = desktop();
        let window_id = WindowId::for_app("terminal");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: PointerPosition { x: 160, y: 130 },
                window_origin: PointerPosition { x: 140, y: 120 },
                window_size: ElementSize {
                    width: 400,
                    height: 300,
                },
            },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 333, y: 257 },
                viewport: ElementSize {
                    width: 1280,
                    height: 800,
                },
            },
        );
        run(&mut state, &mut interaction, DesktopAction::EndMove);
        let dragged = window(&state, "terminal").geometry.clone();
        assert_eq!(dragged, WindowGeometry::from_px(313, 247, 400, 300));

        for _ in 0..2 {
            run(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    window_id: window_id.clone(),
                },
            );
        }

        assert_eq!(window(&state, "terminal").geometry, dragged);
    }

    #[test]
    fn minimize_completes_to_hidden_with_dock_origin() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetDockPosition {
                position: DockPosition::Left,
            },
        );

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::for_app("about"),
            },
        );
        let about = window(&state, "about");
        assert_eq!(about.visibility, WindowVisibility::Minimized);
        assert_eq!(about.minimize_origin, Some(MinimizeOrigin::LeftCenter));
        let [RuntimeEffect::ScheduleMinimizeCompletion { window_id, token }] = effects.as_slice()
        else {
            panic!("expected a single minimize completion, got {effects:?}");
        };

        run(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteMinimize {
                window_id: window_id.clone(),
                token: *token,
            },
        );
        let about = window(&state, "about");
        assert_eq!(about.visibility, WindowVisibility::Hidden);
        assert_eq!(about.minimize_origin, None);
        assert!(!about.is_active);
        assert_eq!(state.launcher("about").map(|l| l.is_active), Some(true));
    }

    #[test]
    fn reopening_before_minimize_completes_keeps_window_visible() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "terminal");
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::for_app("terminal"),
            },
        );
        open(&mut state, &mut interaction, "terminal");

        for effect in effects {
            if let RuntimeEffect::ScheduleMinimizeCompletion { window_id, token } = effect {
                run(
                    &mut state,
                    &mut interaction,
                    DesktopAction::CompleteMinimize { window_id, token },
                );
            }
        }

        let terminal = window(&state, "terminal");
        assert_eq!(terminal.visibility, WindowVisibility::Visible);
        assert_eq!(terminal.minimize_origin, None);
        assert!(terminal.is_active);
        assert_eq!(terminal.entrance, EntrancePhase::Playing);
    }

    #[test]
    fn minimizing_a_hidden_window_is_a_noop() {
        let (mut state, mut interaction) = desktop();
        let before = state.clone();

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::for_app("settings"),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn close_hides_window_and_releases_launcher_but_keeps_geometry() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: WindowId::for_app("about"),
            },
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId::for_app("about"),
            },
        );

        let about = window(&state, "about");
        assert_eq!(about.visibility, WindowVisibility::Hidden);
        assert!(!about.is_active);
        assert!(about.maximized);
        assert_eq!(state.launcher("about").map(|l| l.is_active), Some(false));
        assert_eq!(state.windows.len(), APPS.len());
    }

    #[test]
    fn drag_follows_pointer_with_grab_offset_and_clamps() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about");
        let window_id = WindowId::for_app("about");
        let viewport = ElementSize {
            width: 1280,
            height: 800,
        };

        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: PointerPosition { x: 150, y: 95 },
                window_origin: PointerPosition { x: 100, y: 80 },
                window_size: ElementSize {
                    width: 400,
                    height: 300,
                },
            },
        );
        assert!(window(&state, "about").dragging);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 350, y: 215 },
                viewport,
            },
        );
        assert_eq!(window(&state, "about").geometry.left, "300px");
        assert_eq!(window(&state, "about").geometry.top, "200px");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: -500, y: 5000 },
                viewport,
            },
        );
        assert_eq!(window(&state, "about").geometry.left, "0px");
        assert_eq!(window(&state, "about").geometry.top, "440px");

        run(&mut state, &mut interaction, DesktopAction::EndMove);
        assert!(!window(&state, "about").dragging);
        assert_eq!(interaction.dragging, None);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 600, y: 300 },
                viewport,
            },
        );
        assert_eq!(window(&state, "about").geometry.left, "0px");
    }

    #[test]
    fn maximized_window_ignores_drag_moves() {
        let (mut state, mut interaction) = desktop();
        let window_id = WindowId::for_app("settings");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
            },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id,
                pointer: PointerPosition { x: 50, y: 40 },
                window_origin: PointerPosition { x: 10, y: 34 },
                window_size: ElementSize {
                    width: 1260,
                    height: 696,
                },
            },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 400, y: 400 },
                viewport: ElementSize {
                    width: 1280,
                    height: 800,
                },
            },
        );

        assert_eq!(
            window(&state, "settings").geometry,
            DEFAULT_CHROME.maximized_geometry()
        );
        assert!(window(&state, "settings").is_active);
        assert!(!window(&state, "settings").dragging);
        assert!(interaction.dragging.is_some());

        run(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::for_app("about"),
                pointer: PointerPosition { x: 120, y: 90 },
                window_origin: PointerPosition { x: 100, y: 80 },
                window_size: ElementSize {
                    width: 400,
                    height: 300,
                },
            },
        );

        run(&mut state, &mut interaction, DesktopAction::CloseActiveWindow);

        assert_eq!(interaction.dragging, None);
        assert!(!window(&state, "about").dragging);
        assert_eq!(window(&state, "about").visibility, WindowVisibility::Hidden);
    }

    #[test]
    fn active_window_shortcuts_target_the_active_window_only() {
        let (mut state, mut interaction) = desktop();
        assert!(run(&mut state, &mut interaction, DesktopAction::CloseActiveWindow).is_empty());

        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "terminal");
        let effects = run(&mut state, &mut interaction, DesktopAction::MinimizeActiveWindow);

        assert_eq!(
            window(&state, "terminal").visibility,
            WindowVisibility::Minimized
        );
        assert_eq!(window(&state, "about").visibility, WindowVisibility::Visible);
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleMinimizeCompletion { .. }]
        ));
    }

    #[test]
    fn unknown_theme_changes_nothing_and_persists_nothing() {
        let (mut state, mut interaction) = desktop();
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyTheme {
                name: "aurora".to_string(),
            },
        );
        let before = state.clone();

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyTheme {
                name: "vaporwave".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn known_theme_sets_background_and_persists() {
        let (mut state, mut interaction) = desktop();

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyTheme {
                name: "flamingo".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistPreference(PreferenceKey::Theme)]
        );
        assert_eq!(state.appearance.theme.as_deref(), Some("flamingo"));
        assert_eq!(
            state.appearance.background.as_deref(),
            themes::theme_by_id("flamingo").map(|theme| theme.gradient)
        );
    }

    #[test]
    fn style_actions_persist_their_own_key() {
        let (mut state, mut interaction) = desktop();
        let cases = [
            (DesktopAction::ToggleDarkMode, PreferenceKey::DarkMode),
            (
                DesktopAction::SetDarkMode { enabled: false },
                PreferenceKey::DarkMode,
            ),
            (
                DesktopAction::SetWindowStyle {
                    style: WindowStyle::Glassmorphic,
                },
                PreferenceKey::WindowStyle,
            ),
            (
                DesktopAction::SetDockPosition {
                    position: DockPosition::Right,
                },
                PreferenceKey::DockPosition,
            ),
            (
                DesktopAction::SetAnimationSpeed { speed_ms: 800 },
                PreferenceKey::AnimationSpeed,
            ),
        ];

        for (action, key) in cases {
            assert_eq!(
                run(&mut state, &mut interaction, action),
                vec![RuntimeEffect::PersistPreference(key)]
            );
        }
        assert!(!state.appearance.dark_mode);
        assert_eq!(state.appearance.window_style, WindowStyle::Glassmorphic);
        assert_eq!(state.appearance.background.as_deref(), Some(GLASS_BACKDROP));
        assert_eq!(state.appearance.dock_position, DockPosition::Right);
        assert_eq!(state.appearance.animation_speed_ms, Some(800));
    }

    #[test]
    fn reload_restores_dock_style_dark_mode_and_glass_backdrop() {
        let store = MemoryPrefsStore::with_entries([
            (DOCK_POSITION_KEY, "left"),
            (WINDOW_STYLE_KEY, "glassmorphic"),
            (DARK_MODE_KEY, "true"),
        ]);
        let (mut state, mut interaction) = desktop();
        assert_eq!(state.appearance.background, None);

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HydratePreferences {
                snapshot: load_preferences(&store),
            },
        );

        assert_eq!(effects, Vec::new());
        assert_eq!(state.appearance.dock_position.as_str(), "left");
        assert_eq!(
            document_appearance(&state.appearance),
            DocumentAppearance {
                root_style_class: "style-glassmorphic",
                body_dark_mode: true,
                body_background: Some(GLASS_BACKDROP.to_string()),
                transition_speed: None,
            }
        );
        assert_eq!(store.len(), 3);
    }
}
