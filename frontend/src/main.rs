use std::rc::Rc;

use landing_core::query::ResponseTable;
use landing_core::LandingConfig;
use yew::prelude::*;

mod config;
mod styles;
mod components {
    pub mod nav;
    pub mod notification;
    pub mod query_demo;
    pub mod reveal;
    pub mod ripple;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod console;
    pub mod dom;
    pub mod prompt;
}

use components::notification::ToastHost;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
    pub responses: Rc<ResponseTable>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<LandingConfig>> context={props.config.clone()}>
            <ToastHost>
                <Landing responses={props.responses.clone()} />
            </ToastHost>
        </ContextProvider<Rc<LandingConfig>>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    utils::console::welcome_banner();

    let config = config::load();
    match ResponseTable::builtin() {
        Ok(responses) => {
            yew::Renderer::<App>::with_props(AppProps {
                config: Rc::new(config),
                responses: Rc::new(responses),
            })
            .render();
        }
        Err(e) => log::error!("Failed to load canned responses: {}", e),
    }
}
