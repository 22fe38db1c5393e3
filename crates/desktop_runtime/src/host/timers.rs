//! One-shot timers that feed completions back into the reducer as token-stamped actions.

use std::time::Duration;

use leptos::set_timeout;

use crate::{
    model::WindowId,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
    window_manager::{ENTRANCE_REPLAY_DELAY_MS, MINIMIZE_DURATION_MS},
};

pub(super) fn schedule_entrance_replay(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    token: u64,
) {
    set_timeout(
        move || runtime.dispatch_action(DesktopAction::StartEntranceAnimation { window_id, token }),
        Duration::from_millis(u64::from(ENTRANCE_REPLAY_DELAY_MS)),
    );
}

pub(super) fn schedule_minimize_completion(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    token: u64,
) {
    set_timeout(
        move || runtime.dispatch_action(DesktopAction::CompleteMinimize { window_id, token }),
        Duration::from_millis(u64::from(MINIMIZE_DURATION_MS)),
    );
}
