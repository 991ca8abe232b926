use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Catalog;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let catalog = use_context::<&'static Catalog>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let dataset_label = format!(
        "{} records · {} products",
        catalog.len(),
        catalog.index().product_names().len()
    );

    rsx! {
        div {
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "📦 {APP_NAME}" }
                    span { class: "app-version", "{version_label()} · {dataset_label}" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Duty {}),
                        onclick: move |_| { nav.push(Route::Duty {}); },
                        label: "🧾 Duty Calculator",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Simulator {}),
                        onclick: move |_| { nav.push(Route::Simulator {}); },
                        label: "🚚 Shipment Simulator",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
