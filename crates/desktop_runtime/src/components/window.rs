use super::*;
use crate::{
    apps::{self, WindowBody},
    host::LAZY_LOAD_CLASS,
    model::{ElementSize, WindowRecord},
    window_manager::MINIMIZE_TRANSITION,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Inline style carrying geometry, stacking, visibility and the in-flight animations.
fn window_inline_style(win: &WindowRecord) -> String {
    let geometry = &win.geometry;
    let mut style = format!(
        "left:{};top:{};width:{};height:{};z-index:{};display:{};",
        geometry.left,
        geometry.top,
        geometry.width,
        geometry.height,
        win.z_index,
        if win.visibility.is_displayed() {
            "flex"
        } else {
            "none"
        }
    );
    if let Some(origin) = win.minimize_origin {
        style.push_str(&format!(
            "transform:scale(0);transform-origin:{};transition:{};",
            origin.css_value(),
            MINIMIZE_TRANSITION
        ));
    }
    if let Some(animation) = win.entrance.css_animation() {
        style.push_str(&format!("animation:{animation};"));
    }
    if win.dragging {
        style.push_str("cursor:move;");
    }
    style
}

fn window_class(win: &WindowRecord) -> String {
    let mut class = String::from("window");
    if win.is_active {
        class.push_str(" active");
    }
    if win.maximized {
        class.push_str(" maximized");
    }
    class
}

#[cfg(target_arch = "wasm32")]
fn is_from_window_controls(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".window-controls").ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn is_from_window_controls(_: &web_sys::PointerEvent) -> bool {
    false
}

fn render_window_body(app_name: &str) -> View {
    match apps::window_manifest(app_name).map(|entry| &entry.body) {
        Some(WindowBody::Document { sections }) => sections
            .iter()
            .map(|section| {
                let class = if section.lazy {
                    format!("window-section {LAZY_LOAD_CLASS}")
                } else {
                    "window-section".to_string()
                };
                view! {
                    <section class=class>
                        <h2>{section.heading.clone()}</h2>
                        <p>{section.body.clone()}</p>
                    </section>
                }
            })
            .collect_view(),
        Some(WindowBody::Terminal { lines }) => view! {
            <pre class="terminal-output">{lines.join("\n")}</pre>
        }
        .into_view(),
        Some(WindowBody::Settings) => view! { <SettingsPanel /> }.into_view(),
        None => ().into_view(),
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let node_ref = create_node_ref::<html::Div>();

    let window = {
        let window_id = window_id.clone();
        create_memo(move |_| runtime.state.with(|state| state.window(&window_id).cloned()))
    };
    let title = window
        .get_untracked()
        .map(|win| win.title)
        .unwrap_or_default();
    let body = render_window_body(window_id.app_name());
    let dom_id = window_id.to_string();

    let activate = {
        let window_id = window_id.clone();
        move |_: web_sys::PointerEvent| {
            let already_active = window.with_untracked(|win| {
                win.as_ref().map(|win| win.is_active).unwrap_or(false)
            });
            if !already_active {
                runtime.dispatch_action(DesktopAction::ActivateWindow {
                    window_id: window_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 || is_from_window_controls(&ev) {
                return;
            }
            let Some(element) = node_ref.get_untracked() else {
                return;
            };
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
                window_origin: PointerPosition {
                    x: element.offset_left(),
                    y: element.offset_top(),
                },
                window_size: ElementSize {
                    width: element.offset_width(),
                    height: element.offset_height(),
                },
            });
        }
    };
    let control = move |action: fn(WindowId) -> DesktopAction| {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action(window_id.clone()));
        }
    };

    view! {
        <div
            id=dom_id
            class=move || window.with(|win| win.as_ref().map(window_class).unwrap_or_default())
            style=move || window.with(|win| win.as_ref().map(window_inline_style).unwrap_or_default())
            node_ref=node_ref
            on:pointerdown=activate
        >
            <div class="window-titlebar" on:pointerdown=begin_move>
                <div class="window-controls">
                    <button
                        class="window-control close"
                        aria-label="Close"
                        on:click=control(|window_id| DesktopAction::CloseWindow { window_id })
                    ></button>
                    <button
                        class="window-control minimize"
                        aria-label="Minimize"
                        on:click=control(|window_id| DesktopAction::MinimizeWindow { window_id })
                    ></button>
                    <button
                        class="window-control maximize"
                        aria-label="Maximize"
                        on:click=control(|window_id| DesktopAction::ToggleMaximize { window_id })
                    ></button>
                </div>
                <span class="window-title">{title}</span>
            </div>
            <div class="window-content">{body}</div>
        </div>
    }
}
