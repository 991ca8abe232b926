use dioxus::prelude::*;

use crate::{
    domain::{Catalog, DutyOutcome, DutyQuote, DutySelection},
    ui::{
        components::{
            select_field::SelectField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::{format_percent, format_usd, parse_invoice_value},
};

const DEFAULT_INVOICE: &str = "1000.00";

#[component]
pub fn DutyPage() -> Element {
    let catalog = use_context::<&'static Catalog>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut product = use_signal(|| None::<String>);
    let mut country = use_signal(|| None::<String>);
    let mut description = use_signal(|| None::<String>);
    let mut invoice_input = use_signal(|| DEFAULT_INVOICE.to_string());
    // `None` until the form is submitted; any change to the form clears it.
    let mut outcome = use_signal(|| None::<DutyOutcome>);

    let index = catalog.index();
    let selection = index.resolve(
        product().as_deref(),
        country().as_deref(),
        description().as_deref(),
    );

    let product_options = index.product_names().to_vec();
    let country_options = selection
        .product
        .as_deref()
        .map(|p| index.countries_for(p).to_vec())
        .unwrap_or_default();
    let description_options = match (selection.product.as_deref(), selection.country.as_deref()) {
        (Some(p), Some(c)) => index.descriptions_for(p, c).to_vec(),
        _ => Vec::new(),
    };

    let on_calculate = {
        let selection = selection.clone();
        move |_| {
            let invoice_value = match parse_invoice_value(&invoice_input()) {
                Ok(value) => value,
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, err.to_string());
                    return;
                }
            };

            let result = match (&selection.product, &selection.country, &selection.description) {
                (Some(product), Some(country), Some(description)) => {
                    catalog.estimate_duty(&DutySelection {
                        product: product.clone(),
                        country: country.clone(),
                        description: description.clone(),
                        invoice_value,
                    })
                }
                // incomplete cascade behaves like any other miss
                _ => DutyOutcome::NotFound,
            };

            tracing::info!(
                product = ?selection.product,
                country = ?selection.country,
                found = result.is_found(),
                "duty calculated"
            );
            outcome.set(Some(result));
        }
    };

    let result_view = match outcome() {
        None => rsx! {
            div { class: theme::BANNER_INFO,
                "Fill the form and click 'Calculate Duty' to see results."
            }
        },
        Some(DutyOutcome::NotFound) => rsx! {
            div { class: theme::BANNER_ERROR,
                "❌ No matching record found. Please check your selection."
            }
        },
        Some(DutyOutcome::Found(quote)) => rsx! { QuoteView { quote } },
    };

    rsx! {
        div { class: theme::TWO_COLUMNS,
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "🧾 Shipment Details" }
                SelectField {
                    label: "1. Product Name".to_string(),
                    options: product_options,
                    selected: selection.product.clone(),
                    onchange: move |value: String| {
                        product.set(Some(value));
                        outcome.set(None);
                    },
                }
                SelectField {
                    label: "2. Destination Country".to_string(),
                    options: country_options,
                    selected: selection.country.clone(),
                    onchange: move |value: String| {
                        country.set(Some(value));
                        outcome.set(None);
                    },
                }
                SelectField {
                    label: "3. Product Description".to_string(),
                    options: description_options,
                    selected: selection.description.clone(),
                    onchange: move |value: String| {
                        description.set(Some(value));
                        outcome.set(None);
                    },
                }
                div { class: "field",
                    label { class: theme::LABEL, "4. Invoice Value (USD)" }
                    input {
                        class: theme::INPUT,
                        r#type: "number",
                        min: "0",
                        step: "10",
                        value: "{invoice_input}",
                        oninput: move |evt| {
                            invoice_input.set(evt.value());
                            outcome.set(None);
                        },
                    }
                }
                button { class: theme::BTN_PRIMARY, onclick: on_calculate, "Calculate Duty" }
            }
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "📊 Duty Calculation" }
                {result_view}
            }
        }
    }
}

#[component]
fn QuoteView(quote: DutyQuote) -> Element {
    let tariff = format_percent(quote.tariff_percent);
    let invoice = format_usd(quote.invoice_value);
    let duty = format_usd(quote.estimated_duty);

    rsx! {
        div { class: theme::BANNER_SUCCESS, "✅ Match found!" }
        ul { class: "result-list",
            li { strong { "HS Code: " } code { "{quote.hs_code}" } }
            li { strong { "Product: " } "{quote.product}" }
            li { strong { "Description: " } "{quote.description}" }
            li { strong { "Destination: " } "{quote.destination}" }
            li { strong { "Tariff Rate: " } code { "{tariff}" } }
            li { strong { "Invoice Value: " } code { "{invoice}" } }
            li { strong { "Estimated Duty: " } code { "{duty}" } }
        }
    }
}
