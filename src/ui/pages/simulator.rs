use dioxus::prelude::*;
use time::{Date, OffsetDateTime};

use crate::{
    domain::{simulate_route, RouteEstimate, DESTINATION_CITIES, SIMULATOR_PRODUCTS},
    ui::{
        components::{kpi_card::KpiCard, select_field::SelectField},
        theme,
    },
    util::format::format_date,
};

#[component]
pub fn SimulatorPage() -> Element {
    let mut product = use_signal(|| SIMULATOR_PRODUCTS[0].to_string());
    let mut city = use_signal(|| DESTINATION_CITIES[0].to_string());
    let mut estimate = use_signal(|| None::<RouteEstimate>);

    let product_options: Vec<String> = SIMULATOR_PRODUCTS.iter().map(|p| p.to_string()).collect();
    let city_options: Vec<String> = DESTINATION_CITIES.iter().map(|c| c.to_string()).collect();

    let on_simulate = move |_| {
        let result = simulate_route(&product(), &city(), today());
        tracing::info!(
            product = %result.product,
            destination = %result.destination,
            eta_days = result.eta_days,
            rto_percent = result.rto_percent,
            "route simulated"
        );
        estimate.set(Some(result));
    };

    rsx! {
        div { class: theme::TWO_COLUMNS,
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "🚚 Shipment Simulator" }
                SelectField {
                    label: "Product".to_string(),
                    options: product_options,
                    selected: Some(product()),
                    onchange: move |value: String| {
                        product.set(value);
                        estimate.set(None);
                    },
                }
                SelectField {
                    label: "Destination City".to_string(),
                    options: city_options,
                    selected: Some(city()),
                    onchange: move |value: String| {
                        city.set(value);
                        estimate.set(None);
                    },
                }
                button { class: theme::BTN_PRIMARY, onclick: on_simulate, "Simulate Shipment" }
                p { class: theme::TEXT_MUTED,
                    "Figures are static lane estimates, not live tracking."
                }
            }
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "📍 Route Estimate" }
                match estimate() {
                    Some(result) => rsx! { EstimateView { estimate: result } },
                    None => rsx! {
                        div { class: theme::BANNER_INFO,
                            "Pick a product and destination, then click 'Simulate Shipment'."
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn EstimateView(estimate: RouteEstimate) -> Element {
    let route = estimate.route_label();
    let eta_date = format_date(estimate.eta_date);
    let eta_days = format!("{} day(s)", estimate.eta_days);
    let rto = format!("{}%", estimate.rto_percent);
    let status = estimate.status.label().to_string();

    rsx! {
        div { class: theme::KPI_GRID,
            KpiCard { title: "Route".to_string(), value: route, description: Some(estimate.product.clone()) }
            KpiCard { title: "Status".to_string(), value: status, description: None }
            KpiCard { title: "ETA".to_string(), value: eta_date, description: Some(eta_days) }
            KpiCard {
                title: "Return-to-origin risk".to_string(),
                value: rto,
                description: Some("Clamped to 0–25%".to_string()),
            }
        }
    }
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
