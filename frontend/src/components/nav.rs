use landing_core::nav::{active_section, is_active_link, nav_background};
use landing_core::LandingConfig;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::utils::dom;

const LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#demo", "AI Demo"),
    ("#benefits", "Benefits"),
    ("#contact", "Contact"),
];

#[derive(Clone, PartialEq)]
struct ScrollState {
    active: Option<String>,
    background: &'static str,
}

impl ScrollState {
    fn read(config: &LandingConfig) -> Self {
        let scroll_y = dom::scroll_y();
        let sections = dom::section_offsets();
        Self {
            active: active_section(&sections, scroll_y, config).map(str::to_string),
            background: nav_background(scroll_y, config),
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_landing_config();
    let scroll = use_state_eq(|| ScrollState {
        active: None,
        background: nav_background(0.0, &config),
    });

    // Track the scroll position for link highlighting and the background.
    {
        let scroll = scroll.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || scroll.set(ScrollState::read(&config));
                update();

                let listener = Closure::<dyn Fn()>::new(update);
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to listen for scroll: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let links = LINKS.into_iter().map(|(href, label)| {
        let onclick = {
            let config = config.clone();
            let target = href.trim_start_matches('#');
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                dom::scroll_to_section(target, &config);
            })
        };
        let active = is_active_link(href, scroll.active.as_deref());
        html! {
            <a
                href={href}
                class={classes!("nav-link", active.then_some("active"))}
                onclick={onclick}
            >
                { label }
            </a>
        }
    });

    html! {
        <nav class="nav" style={format!("background: {};", scroll.background)}>
            <div class="nav-container">
                <a href="#" class="nav-logo">{"Ayenyo AI"}</a>
                <div class="nav-links">
                    { for links }
                </div>
            </div>
        </nav>
    }
}
