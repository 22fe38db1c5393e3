//! Scroll-driven frame scheduling: a debounce timer feeding a single-flight animation frame.

use std::{cell::Cell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use leptos::{
    ev, on_cleanup, request_animation_frame, set_timeout_with_handle, store_value,
    window_event_listener, StoredValue, TimeoutHandle,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
const SCROLL_DEBOUNCE_MS: u64 = 100;
#[cfg(target_arch = "wasm32")]
const SCROLL_OFFSET_PROPERTY: &str = "--scroll-offset";

/// Allows at most one pending frame callback at a time.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct FrameTickGate {
    pending: Rc<Cell<bool>>,
}

impl FrameTickGate {
    /// Claims the gate; returns `false` when a frame is already pending.
    pub fn try_acquire(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Releases the gate once the pending frame has run.
    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(target_arch = "wasm32")]
fn write_scroll_offset() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or_default();
    let Some(root) = window
        .document()
        .and_then(|document| document.document_element())
        .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let _ = root
        .style()
        .set_property(SCROLL_OFFSET_PROPERTY, &format!("{offset}px"));
}

#[cfg(target_arch = "wasm32")]
fn schedule_frame(gate: FrameTickGate) {
    if !gate.try_acquire() {
        return;
    }
    request_animation_frame(move || {
        write_scroll_offset();
        gate.release();
    });
}

pub(super) fn install_scroll_frames() {
    #[cfg(target_arch = "wasm32")]
    {
        let gate = FrameTickGate::default();
        let debounce: StoredValue<Option<TimeoutHandle>> = store_value(None);

        let handle = window_event_listener(ev::scroll, move |_| {
            if let Some(pending) = debounce.get_value() {
                pending.clear();
            }
            let gate = gate.clone();
            let timeout = set_timeout_with_handle(
                move || schedule_frame(gate),
                Duration::from_millis(SCROLL_DEBOUNCE_MS),
            );
            debounce.set_value(timeout.ok());
        });
        on_cleanup(move || {
            handle.remove();
            if let Some(pending) = debounce.get_value() {
                pending.clear();
            }
        });
    }
}
