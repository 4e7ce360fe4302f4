use landing_core::effects::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Adds the `animate-in` class to every animated card once it scrolls into
/// view. Elements are observed after the first render and never un-revealed.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let observer = observe_reveal_targets();
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

fn observe_reveal_targets() -> Option<(IntersectionObserver, EntriesCallback)> {
    let document = web_sys::window()?.document()?;

    let callback = EntriesCallback::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if let Err(e) = entry.target().class_list().add_1(REVEAL_CLASS) {
                    log::warn!("Failed to reveal element: {:?}", e);
                }
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::error!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };

    let targets = match document.query_selector_all(REVEAL_SELECTORS) {
        Ok(targets) => targets,
        Err(e) => {
            log::warn!("Failed to query animated elements: {:?}", e);
            return None;
        }
    };
    let mut observed = 0;
    for i in 0..targets.length() {
        if let Some(element) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
            observed += 1;
        }
    }
    log::debug!("Observing {} animated elements", observed);

    Some((observer, callback))
}
