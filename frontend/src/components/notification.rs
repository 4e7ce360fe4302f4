use std::rc::Rc;

use gloo_timers::callback::Timeout;
use landing_core::toast::{self, Notice, Toast, ToastId, ToastSlot, ToastStep};
use yew::prelude::*;

use crate::config::use_landing_config;

/// Handle for showing a toast from anywhere below a `ToastHost`.
#[derive(Clone, PartialEq)]
pub struct Toaster(Callback<Notice>);

impl Toaster {
    pub fn show(&self, notice: Notice) {
        self.0.emit(notice);
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        Toaster(Callback::from(|notice: Notice| {
            log::warn!("No toast host mounted, dropping: {}", notice.message);
        }))
    })
}

#[derive(Default, PartialEq)]
struct ToastState {
    slot: ToastSlot,
}

enum ToastAction {
    Show(Notice),
    Step(ToastId, ToastStep),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = self.slot.clone();
        match action {
            ToastAction::Show(notice) => {
                slot.show(notice);
            }
            ToastAction::Step(id, step) => {
                if !slot.apply(id, step) {
                    return self;
                }
            }
        }
        Rc::new(Self { slot })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let config = use_landing_config();
    let toasts = use_reducer(ToastState::default);

    // Built once so consumers are not re-rendered by phase steps.
    let toaster = {
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| {
                Toaster(Callback::from(move |notice: Notice| {
                    dispatcher.dispatch(ToastAction::Show(notice));
                }))
            },
            (),
        )
    };

    // Timers belong to the toast on screen; replacing it drops them.
    {
        let dispatcher = toasts.dispatcher();
        let timings = config.toast;
        use_effect_with_deps(
            move |current: &Option<ToastId>| {
                let timers: Vec<Timeout> = match *current {
                    Some(id) => toast::schedule(&timings)
                        .into_iter()
                        .map(|(delay, step)| {
                            let dispatcher = dispatcher.clone();
                            Timeout::new(delay, move || {
                                dispatcher.dispatch(ToastAction::Step(id, step));
                            })
                        })
                        .collect(),
                    None => Vec::new(),
                };
                move || drop(timers)
            },
            toasts.slot.current().map(|toast| toast.id),
        );
    }

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { props.children.clone() }
            { for toasts.slot.current().map(render_toast) }
        </ContextProvider<Toaster>>
    }
}

fn render_toast(toast: &Toast) -> Html {
    let style = format!(
        "position: fixed; top: 100px; right: 20px; padding: 1rem 1.5rem; border-radius: 8px; \
         color: white; font-weight: 500; z-index: 9999; transform: {}; \
         transition: transform 0.3s ease; max-width: 300px; background-color: {};",
        toast.phase.transform(),
        toast.notice.kind.background(),
    );
    html! {
        <div
            key={format!("toast-{:?}", toast.id)}
            class={classes!("notification", toast.notice.kind.class_name())}
            role="status"
            style={style}
        >
            { toast.notice.message.clone() }
        </div>
    }
}
