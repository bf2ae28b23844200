//! Plain data row types written by the CSV backend.

use nav_network::{Leg, RoadNetwork, RouteResult};

use crate::TripSummary;

/// One leg of a routed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRow {
    pub query_id:     u64,
    pub leg_index:    u32,
    pub from_city:    u32,
    pub to_city:      u32,
    pub road_name:    String,
    pub traffic:      &'static str,
    pub road_type:    &'static str,
    pub distance_km:  f64,
    pub time_minutes: f64,
    pub fuel_litres:  f64,
}

impl LegRow {
    pub fn new(query_id: u64, leg_index: u32, leg: &Leg) -> Self {
        Self {
            query_id,
            leg_index,
            from_city:    leg.from.get(),
            to_city:      leg.to.get(),
            road_name:    leg.road_name.to_string(),
            traffic:      leg.traffic_label(),
            road_type:    leg.road_type.as_str(),
            distance_km:  leg.distance_km,
            time_minutes: leg.time_minutes,
            fuel_litres:  leg.fuel_litres,
        }
    }
}

/// Totals of one routed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummaryRow {
    pub query_id:           u64,
    pub origin:             String,
    pub destination:        String,
    pub speed_kmh:          f64,
    pub legs:               u32,
    pub total_distance_km:  f64,
    pub total_time_minutes: f64,
    pub total_fuel_litres:  f64,
    pub fuel_cost:          f64,
    pub currency:           String,
}

impl RouteSummaryRow {
    pub fn new(query_id: u64, network: &RoadNetwork, route: &RouteResult, summary: &TripSummary) -> Self {
        let name = |id| network.city_name(id).unwrap_or_default().to_owned();
        Self {
            query_id,
            origin:             name(route.origin),
            destination:        name(route.destination),
            speed_kmh:          route.speed_kmh,
            legs:               route.legs.len() as u32,
            total_distance_km:  route.total_distance_km,
            total_time_minutes: route.total_time_minutes,
            total_fuel_litres:  route.total_fuel_litres,
            fuel_cost:          summary.fuel_cost,
            currency:           summary.currency.clone(),
        }
    }
}
