use dioxus::prelude::*;

use crate::ui::theme;

/// Labelled drop-down. Only values from `options` can be chosen.
#[component]
pub fn SelectField(
    label: String,
    options: Vec<String>,
    selected: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    if options.is_empty() {
        return rsx! {
            div { class: "field",
                label { class: theme::LABEL, "{label}" }
                p { class: "field-empty", "No options available" }
            }
        };
    }

    rsx! {
        div { class: "field",
            label { class: theme::LABEL, "{label}" }
            select {
                class: theme::SELECT,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                for choice in options.iter() {
                    option {
                        value: "{choice}",
                        selected: selected.as_deref() == Some(choice.as_str()),
                        "{choice}"
                    }
                }
            }
        }
    }
}
