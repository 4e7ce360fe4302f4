use std::rc::Rc;

use gloo_timers::callback::Timeout;
use landing_core::query::{
    QueryDemo, ResponseTable, ResponseView, SubmitOutcome, Ticket, EXAMPLE_QUERIES,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::utils::dom::focus_input;

#[derive(Clone, PartialEq)]
struct DemoState(QueryDemo);

enum DemoAction {
    Submit(String),
    Resolve(Ticket),
    ClearPulse(Ticket),
}

impl Reducible for DemoState {
    type Action = DemoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut demo = self.0.clone();
        let changed = match action {
            DemoAction::Submit(query) => {
                matches!(demo.submit(&query), SubmitOutcome::Scheduled { .. })
            }
            DemoAction::Resolve(ticket) => match demo.resolve(ticket) {
                Some(category) => {
                    log::info!("Query resolved to '{}' responses", category);
                    true
                }
                None => false,
            },
            DemoAction::ClearPulse(ticket) => demo.clear_pulse(ticket),
        };
        if changed {
            Rc::new(DemoState(demo))
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryDemoProps {
    pub responses: Rc<ResponseTable>,
}

#[function_component(QueryDemoWidget)]
pub fn query_demo(props: &QueryDemoProps) -> Html {
    let config = use_landing_config();
    let demo = use_reducer({
        let delay = config.analysis_delay_ms;
        move || DemoState(QueryDemo::new(delay))
    });
    let query = use_state(String::new);
    let input_ref = use_node_ref();

    // Only the latest analysis keeps a live timer: a new ticket tears the
    // previous effect down, which drops and cancels its timeout.
    {
        let dispatcher = demo.dispatcher();
        let delay = demo.0.delay_ms();
        use_effect_with_deps(
            move |pending: &Option<Ticket>| {
                let timer = pending.map(|ticket| {
                    Timeout::new(delay, move || dispatcher.dispatch(DemoAction::Resolve(ticket)))
                });
                move || drop(timer)
            },
            demo.0.pending(),
        );
    }

    {
        let dispatcher = demo.dispatcher();
        let pulse_ms = config.pulse_ms;
        use_effect_with_deps(
            move |pulse: &Option<Ticket>| {
                let timer = pulse.map(|ticket| {
                    Timeout::new(pulse_ms, move || {
                        dispatcher.dispatch(DemoAction::ClearPulse(ticket))
                    })
                });
                move || drop(timer)
            },
            demo.0.pulse(),
        );
    }

    let submit = {
        let demo = demo.clone();
        let query = query.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: ()| {
            if query.trim().is_empty() {
                focus_input(&input_ref);
                return;
            }
            demo.dispatch(DemoAction::Submit((*query).clone()));
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let examples = EXAMPLE_QUERIES.into_iter().map(|example| {
        let onclick = {
            let query = query.clone();
            let input_ref = input_ref.clone();
            Callback::from(move |_: MouseEvent| {
                query.set(example.to_string());
                focus_input(&input_ref);
            })
        };
        html! {
            <button class="example-query" data-query={example} onclick={onclick}>
                { example }
            </button>
        }
    });

    let view = ResponseView::render(demo.0.state(), &props.responses);

    html! {
        <section id="demo" class="ai-demo">
            <div class="ai-interface">
                <div class="query-input-row">
                    <input
                        ref={input_ref.clone()}
                        id="aiQueryInput"
                        type="text"
                        placeholder="Ask about any medical research topic..."
                        value={(*query).clone()}
                        oninput={oninput}
                        onkeydown={onkeydown}
                    />
                    <button
                        id="submitQuery"
                        class={classes!("submit-query", demo.0.pulse().map(|_| "success-pulse"))}
                        onclick={submit.reform(|_: MouseEvent| ())}
                    >
                        {"Ask Ayenyo"}
                    </button>
                </div>
                <div class="example-queries">
                    { for examples }
                </div>
                <div id="responseSection" class="response-section">
                    { render_response(&view) }
                </div>
            </div>
        </section>
    }
}

fn render_response(view: &ResponseView) -> Html {
    match view {
        ResponseView::Placeholder => html! {
            <div class="response-placeholder">
                {"Ask a question to see how Ayenyo surfaces the latest research."}
            </div>
        },
        ResponseView::Analyzing => html! {
            <div class="response-content">
                <div id="analyzingState" class="analyzing-state">
                    <div class="spinner"></div>
                    <p>{"Analyzing medical literature..."}</p>
                </div>
            </div>
        },
        ResponseView::Result(result) => html! {
            <div class="response-content">
                <div id="responseResult" class="response-result">
                    <p id="resultSummary" class="result-summary">{ result.summary.clone() }</p>
                    <div id="researchInsights" class="research-insights">
                        { for result.insights.iter().map(|line| html! {
                            <div class="insight">{ line.clone() }</div>
                        }) }
                    </div>
                </div>
            </div>
        },
    }
}
