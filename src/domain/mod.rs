//! Tariff lookup and shipment estimate logic lives here.

pub mod catalog;
pub mod dependency_index;
pub mod entities;
pub mod lookup;
pub mod simulator;

#[allow(unused_imports)]
pub use catalog::{Catalog, CatalogError};
#[allow(unused_imports)]
pub use dependency_index::{CascadeSelection, DependencyIndex, FormDependencies};
#[allow(unused_imports)]
pub use entities::{
    DutyOutcome, DutyQuote, DutySelection, RouteEstimate, SelectionKey, ShipmentStatus,
    TariffRecord,
};
#[allow(unused_imports)]
pub use lookup::{compute_duty, estimate_duty, find_match};
#[allow(unused_imports)]
pub use simulator::{
    compute_eta_date, compute_eta_days, compute_rto_percent, simulate_route,
    status_for_destination_index, DESTINATION_CITIES, ORIGIN_CITY, SIMULATOR_PRODUCTS,
};
