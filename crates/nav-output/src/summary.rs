//! Presentation-side figures derived from a route.

use nav_core::{FuelKind, NavConfig};
use nav_network::RouteResult;

/// Hours/minutes split and fuel cost of a routed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    /// Whole hours of travel.
    pub hours:     u64,
    /// Remaining whole minutes (`0..60`).  Fractions of a minute are dropped.
    pub minutes:   u32,
    pub fuel_kind: FuelKind,
    /// `total_fuel_litres × price per litre`.
    pub fuel_cost: f64,
    pub currency:  String,
}

impl TripSummary {
    pub fn new(route: &RouteResult, config: &NavConfig) -> Self {
        let (hours, minutes) = split_minutes(route.total_time_minutes);
        Self {
            hours,
            minutes,
            fuel_kind: config.fuel_kind,
            fuel_cost: route.total_fuel_litres * config.fuel_price(),
            currency:  config.currency.clone(),
        }
    }
}

/// Truncate `total` to whole minutes and split into `(hours, minutes)`.
pub fn split_minutes(total: f64) -> (u64, u32) {
    let whole = total.max(0.0).trunc() as u64;
    (whole / 60, (whole % 60) as u32)
}
