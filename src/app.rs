use dioxus::prelude::*;

use crate::{
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{DutyPage, SimulatorPage},
        shell::Shell,
    },
    util::{assets, version::APP_SHORT_NAME},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/duty")]
    Duty {},
    #[route("/simulator")]
    Simulator {},
}

/// Root component. The catalog itself is injected by `main` through the launch context.
#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Title { "{APP_SHORT_NAME}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Duty() -> Element {
    rsx! { Shell { DutyPage {} } }
}

#[component]
pub fn Simulator() -> Element {
    rsx! { Shell { SimulatorPage {} } }
}
