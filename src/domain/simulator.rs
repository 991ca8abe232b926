//! Static shipment simulator: ETA, return-to-origin risk and a position-based status.
//!
//! Lane figures are hand-authored reference values, not live tracking data.

use time::{Date, Duration};

use super::entities::{RouteEstimate, ShipmentStatus};

pub const ORIGIN_CITY: &str = "Jakarta";

/// Destination cities offered by the simulator, in display order.
/// A city's position here drives [`status_for_destination_index`].
pub const DESTINATION_CITIES: [&str; 4] = ["Bandung", "Surabaya", "Medan", "Makassar"];

pub const SIMULATOR_PRODUCTS: [&str; 4] = [
    "mobile phone",
    "plastic chair",
    "cotton t-shirt",
    "skincare serum",
];

pub const DEFAULT_ETA_DAYS: u32 = 3;
pub const DEFAULT_CITY_RISK: i32 = 8;
pub const DEFAULT_PRODUCT_RISK: i32 = 2;
pub const MAX_RTO_PERCENT: i32 = 25;

/// Per-city lane figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneProfile {
    pub city: &'static str,
    pub eta_days: u32,
    pub base_risk: i32,
}

static LANES: [LaneProfile; 4] = [
    LaneProfile {
        city: "Bandung",
        eta_days: 1,
        base_risk: 5,
    },
    LaneProfile {
        city: "Surabaya",
        eta_days: 2,
        base_risk: 6,
    },
    LaneProfile {
        city: "Medan",
        eta_days: 4,
        base_risk: 9,
    },
    LaneProfile {
        city: "Makassar",
        eta_days: 5,
        base_risk: 10,
    },
];

static PRODUCT_RISK: [(&str, i32); 4] = [
    ("mobile phone", 6),
    ("plastic chair", 1),
    ("cotton t-shirt", 2),
    ("skincare serum", 4),
];

pub fn lane_profile(city: &str) -> Option<&'static LaneProfile> {
    LANES.iter().find(|lane| lane.city == city)
}

pub fn compute_eta_days(city: &str) -> u32 {
    lane_profile(city)
        .map(|lane| lane.eta_days)
        .unwrap_or(DEFAULT_ETA_DAYS)
}

/// Calendar-day addition; saturates at [`Date::MAX`].
pub fn compute_eta_date(eta_days: u32, reference_date: Date) -> Date {
    reference_date
        .checked_add(Duration::days(i64::from(eta_days)))
        .unwrap_or(Date::MAX)
}

fn base_risk_for_city(city: &str) -> i32 {
    lane_profile(city)
        .map(|lane| lane.base_risk)
        .unwrap_or(DEFAULT_CITY_RISK)
}

fn product_risk_add_on(product: &str) -> i32 {
    PRODUCT_RISK
        .iter()
        .find(|(name, _)| *name == product)
        .map(|(_, add_on)| *add_on)
        .unwrap_or(DEFAULT_PRODUCT_RISK)
}

/// Return-to-origin percentage, always within `0..=25`.
pub fn compute_rto_percent(product: &str, city: &str) -> u8 {
    let combined = base_risk_for_city(city) + product_risk_add_on(product);
    // clamped into 0..=25, fits in u8
    combined.clamp(0, MAX_RTO_PERCENT) as u8
}

pub fn status_for_destination_index(index: usize) -> ShipmentStatus {
    match index {
        0 => ShipmentStatus::PickedUp,
        1 => ShipmentStatus::InTransit,
        2 | 3 => ShipmentStatus::AtDestinationStation,
        _ => ShipmentStatus::InTransit,
    }
}

pub fn destination_index(city: &str) -> Option<usize> {
    DESTINATION_CITIES.iter().position(|candidate| *candidate == city)
}

pub fn simulate_route(product: &str, city: &str, reference_date: Date) -> RouteEstimate {
    let eta_days = compute_eta_days(city);
    let status = destination_index(city)
        .map(status_for_destination_index)
        .unwrap_or(ShipmentStatus::InTransit);

    RouteEstimate {
        origin: ORIGIN_CITY.to_string(),
        destination: city.to_string(),
        product: product.to_string(),
        eta_days,
        eta_date: compute_eta_date(eta_days, reference_date),
        rto_percent: compute_rto_percent(product, city),
        status,
    }
}
