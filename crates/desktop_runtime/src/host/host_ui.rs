#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use crate::appearance::{DARK_MODE_CLASS, TRANSITION_SPEED_PROPERTY};
use crate::{appearance::DocumentAppearance, model::ElementSize};

const FALLBACK_VIEWPORT: ElementSize = ElementSize {
    width: 1024,
    height: 768,
};

#[cfg(target_arch = "wasm32")]
fn set_or_remove_property(style: &web_sys::CssStyleDeclaration, name: &str, value: Option<&str>) {
    let _ = match value {
        Some(value) => style.set_property(name, value),
        None => style.remove_property(name).map(|_| ()),
    };
}

pub(super) fn apply_document_appearance(appearance: &DocumentAppearance) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            for class in DocumentAppearance::all_root_style_classes() {
                if class != appearance.root_style_class {
                    let _ = classes.remove_1(class);
                }
            }
            let _ = classes.add_1(appearance.root_style_class);

            if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
                set_or_remove_property(
                    &root.style(),
                    TRANSITION_SPEED_PROPERTY,
                    appearance.transition_speed.as_deref(),
                );
            }
        }

        if let Some(body) = document.body() {
            let _ = body
                .class_list()
                .toggle_with_force(DARK_MODE_CLASS, appearance.body_dark_mode);
            set_or_remove_property(
                &body.style(),
                "background",
                appearance.body_background.as_deref(),
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = appearance;
}

pub(super) fn viewport_size() -> ElementSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>,
                             fallback: i32| {
                value
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback)
            };
            return ElementSize {
                width: dimension(window.inner_width(), FALLBACK_VIEWPORT.width),
                height: dimension(window.inner_height(), FALLBACK_VIEWPORT.height),
            };
        }
    }

    FALLBACK_VIEWPORT
}
