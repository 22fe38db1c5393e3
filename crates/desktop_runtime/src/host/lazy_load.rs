#[cfg(target_arch = "wasm32")]
use leptos::request_animation_frame;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub const LAZY_LOAD_CLASS: &str = "lazy-load";
pub const LOADED_CLASS: &str = "loaded";
/// Fraction of an element that must be visible before it is revealed.
pub const LAZY_LOAD_THRESHOLD: f64 = 0.1;

#[cfg(target_arch = "wasm32")]
fn observe_lazy_elements() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(elements) = document.query_selector_all(&format!(".{LAZY_LOAD_CLASS}")) else {
        return;
    };
    if elements.length() == 0 {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(LOADED_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(LAZY_LOAD_THRESHOLD));
    let observer = match web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            leptos::logging::warn!("lazy-load observer unavailable: {err:?}");
            return;
        }
    };
    // The observer keeps calling back for the lifetime of the page.
    on_intersect.forget();

    for index in 0..elements.length() {
        if let Some(element) = elements
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            observer.observe(&element);
        }
    }
}

pub(super) fn install_lazy_load() {
    #[cfg(target_arch = "wasm32")]
    request_animation_frame(observe_lazy_elements);
}
