use std::rc::Rc;

use gloo_timers::callback::Timeout;
use landing_core::effects::Ripple;
use web_sys::Element;
use yew::prelude::*;

use crate::config::use_landing_config;

#[derive(Default)]
struct Ripples {
    items: Vec<(u64, Ripple)>,
    last_id: u64,
}

enum RippleAction {
    Add(Ripple),
    Expire,
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut last_id = self.last_id;
        match action {
            RippleAction::Add(ripple) => {
                last_id += 1;
                items.push((last_id, ripple));
            }
            RippleAction::Expire => {
                if items.is_empty() {
                    return self;
                }
                items.remove(0);
            }
        }
        Rc::new(Self { items, last_id })
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub action: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button that spawns an expanding ripple at the click point.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let config = use_landing_config();
    let ripples = use_reducer(Ripples::default);
    let button = use_node_ref();

    let onclick = {
        let dispatcher = ripples.dispatcher();
        let button = button.clone();
        let onclick = props.onclick.clone();
        let lifetime = config.ripple_ms;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = button.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let ripple = Ripple::at_click(
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                    e.client_x() as f64,
                    e.client_y() as f64,
                );
                dispatcher.dispatch(RippleAction::Add(ripple));

                // Ripples expire in click order, so the oldest one goes first.
                let dispatcher = dispatcher.clone();
                Timeout::new(lifetime, move || {
                    dispatcher.dispatch(RippleAction::Expire);
                })
                .forget();
            }
            onclick.emit(e);
        })
    };

    html! {
        <button
            ref={button}
            class={props.class.clone()}
            data-action={props.action.clone()}
            style="position: relative; overflow: hidden;"
            onclick={onclick}
        >
            { props.children.clone() }
            { for ripples.items.iter().map(|(id, ripple)| html! {
                <span key={id.to_string()} class="ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}
