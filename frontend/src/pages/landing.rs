use std::rc::Rc;

use landing_core::leads::{request_lead, LeadKind};
use landing_core::query::ResponseTable;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::notification::use_toaster;
use crate::components::query_demo::QueryDemoWidget;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::ripple::RippleButton;
use crate::config::use_landing_config;
use crate::styles;
use crate::utils::dom;
use crate::utils::prompt::WindowPrompt;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub responses: Rc<ResponseTable>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = use_landing_config();
    let toaster = use_toaster();
    use_reveal_on_scroll();

    let lead_request = |kind: LeadKind| {
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(notice) = request_lead(kind, &WindowPrompt) {
                toaster.show(notice);
            }
        })
    };
    let on_demo = lead_request(LeadKind::Demo);
    let on_contact = lead_request(LeadKind::Sales);
    let on_learn = {
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            dom::scroll_to_section("features", &config);
        })
    };

    html! {
        <div class="landing-page">
            <style>
                { styles::NAV_ACTIVE }
                { styles::REVEAL }
                { styles::RIPPLE }
                { styles::QUERY_DEMO }
            </style>
            <Nav />
            <header class="hero" id="home">
                <div class="hero-content">
                    <h1>{"Medical research, answered in seconds"}</h1>
                    <p class="hero-subtitle">
                        {"Ayenyo AI reads the latest studies so clinicians can focus on patients."}
                    </p>
                    <div class="hero-actions">
                        <RippleButton class={classes!("primary-button")} action="demo" onclick={on_demo.clone()}>
                            {"Request a Demo"}
                        </RippleButton>
                        <RippleButton class={classes!("secondary-button")} action="learn" onclick={on_learn}>
                            {"Learn More"}
                        </RippleButton>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <h2>{"Built for clinical decisions"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{"Live literature"}</h3>
                        <p>{"Thousands of new papers indexed every week."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Evidence summaries"}</h3>
                        <p>{"Key findings distilled into a few lines."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Cited insights"}</h3>
                        <p>{"Every answer traces back to peer-reviewed sources."}</p>
                    </div>
                </div>
            </section>

            <QueryDemoWidget responses={props.responses.clone()} />

            <section id="benefits" class="benefits">
                <div class="benefit-item">{"Less time searching, more time with patients"}</div>
                <div class="benefit-item">{"Recommendations grounded in current guidelines"}</div>
                <div class="metrics">
                    <div class="metric"><strong>{"70%"}</strong>{" faster literature review"}</div>
                    <div class="metric"><strong>{"24/7"}</strong>{" research assistance"}</div>
                </div>
            </section>

            <section id="contact" class="cta">
                <h2>{"Bring Ayenyo to your team"}</h2>
                <div class="cta-actions">
                    <RippleButton class={classes!("cta-button")} action="demo" onclick={on_demo}>
                        {"Schedule a Demo"}
                    </RippleButton>
                    <RippleButton class={classes!("cta-button")} action="contact" onclick={on_contact}>
                        {"Contact Sales"}
                    </RippleButton>
                </div>
            </section>
        </div>
    }
}
