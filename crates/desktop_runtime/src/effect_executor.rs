//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor that runs queued [`crate::RuntimeEffect`] values in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Swap the batch out first so dispatches made while draining land in a fresh queue.
        let mut batch = Vec::new();
        runtime
            .effects
            .update(|queue| std::mem::swap(queue, &mut batch));

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
