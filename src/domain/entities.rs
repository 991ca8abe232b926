#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// One row of the HS lookup dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TariffRecord {
    pub product: String,
    pub destination: String,
    pub description: String,
    pub hs_code: String,
    pub tariff_percent: f64,
}

impl TariffRecord {
    /// True when the record's key equals the given selection exactly.
    /// Comparison is case-sensitive with no trimming.
    pub fn matches(&self, product: &str, destination: &str, description: &str) -> bool {
        self.product == product && self.destination == destination && self.description == description
    }
}

/// Composite key for the description level of the cascade.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey {
    pub product: String,
    pub destination: String,
}

impl SelectionKey {
    pub fn new(product: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.product, self.destination)
    }
}

/// Fully specified input for the duty path.
#[derive(Clone, Debug, PartialEq)]
pub struct DutySelection {
    pub product: String,
    pub country: String,
    pub description: String,
    pub invoice_value: f64,
}

/// A matched record together with the computed duty.
#[derive(Clone, Debug, PartialEq)]
pub struct DutyQuote {
    pub hs_code: String,
    pub product: String,
    pub description: String,
    pub destination: String,
    pub tariff_percent: f64,
    pub invoice_value: f64,
    pub estimated_duty: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DutyOutcome {
    Found(DutyQuote),
    NotFound,
}

impl DutyOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, DutyOutcome::Found(_))
    }

    pub fn quote(&self) -> Option<&DutyQuote> {
        match self {
            DutyOutcome::Found(quote) => Some(quote),
            DutyOutcome::NotFound => None,
        }
    }
}

/// Position-based shipment status shown by the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipmentStatus {
    PickedUp,
    InTransit,
    AtDestinationStation,
}

impl ShipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::PickedUp => "Picked up",
            ShipmentStatus::InTransit => "In transit",
            ShipmentStatus::AtDestinationStation => "At destination station",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the route simulator for one product and destination city.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub origin: String,
    pub destination: String,
    pub product: String,
    pub eta_days: u32,
    pub eta_date: Date,
    pub rto_percent: u8,
    pub status: ShipmentStatus,
}

impl RouteEstimate {
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
