use landing_core::nav::{self, SectionOffset};
use landing_core::LandingConfig;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

pub fn scroll_y() -> f64 {
    window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Offsets of every `section[id]`, in document order.
pub fn section_offsets() -> Vec<SectionOffset> {
    let Some(document) = window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let sections = match document.query_selector_all("section[id]") {
        Ok(sections) => sections,
        Err(e) => {
            log::warn!("Failed to list sections: {:?}", e);
            return Vec::new();
        }
    };

    (0..sections.length())
        .filter_map(|i| sections.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionOffset {
            id: section.id(),
            top: section.offset_top() as f64,
        })
        .collect()
}

/// Smooth-scrolls to the section with the given id, leaving room for the
/// fixed navigation bar.
pub fn scroll_to_section(id: &str, config: &LandingConfig) {
    let Some(window) = window() else {
        return;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(nav::scroll_target(section.offset_top() as f64, config));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn focus_input(input: &NodeRef) {
    if let Some(input) = input.cast::<HtmlInputElement>() {
        if let Err(e) = input.focus() {
            log::warn!("Failed to focus input: {:?}", e);
        }
    }
}
