//! Route results and their reconstruction from search labels.

use std::sync::Arc;

use nav_core::{segment_fuel_litres, segment_travel_time_minutes, CityId, RoadType, TrafficLevel};

use crate::network::RoadNetwork;
use crate::router::SearchState;

/// One road driven between two consecutive cities of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub from:         CityId,
    pub to:           CityId,
    pub road_name:    Arc<str>,
    pub traffic:      TrafficLevel,
    pub road_type:    RoadType,
    pub distance_km:  f64,
    /// Travel time of this leg, including the traffic delay.
    pub time_minutes: f64,
    pub fuel_litres:  f64,
}

impl Leg {
    /// Traffic condition as printed on the receipt.
    pub fn traffic_label(&self) -> &'static str {
        self.traffic.as_str()
    }
}

/// The result of a successful routing query.
///
/// Totals are the search's own accumulated labels for the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub origin:             CityId,
    pub destination:        CityId,
    /// Constant speed the route was computed for.
    pub speed_kmh:          f64,
    /// Legs in travel order, from `origin` to `destination`.
    pub legs:               Vec<Leg>,
    pub total_time_minutes: f64,
    pub total_distance_km:  f64,
    pub total_fuel_litres:  f64,
}

impl RouteResult {
    /// `true` if origin and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }

    /// Visited cities in order, including both endpoints.
    pub fn cities(&self) -> Vec<CityId> {
        let mut out = Vec::with_capacity(self.legs.len() + 1);
        out.push(self.origin);
        out.extend(self.legs.iter().map(|l| l.to));
        out
    }

    /// Walk the predecessor chain back from `end_slot` and turn it into legs.
    ///
    /// The road reported for each `(u, v)` step is the first road from `u` to
    /// `v` in definition order, which is the road the search used unless the
    /// network has parallel roads between the two cities.
    pub(crate) fn from_search(
        network: &RoadNetwork,
        state: &SearchState,
        end_slot: usize,
        speed_kmh: f64,
    ) -> RouteResult {
        // Backtrack: (from_slot, relaxing road index, to_slot), end first.
        let mut steps = Vec::new();
        let mut cur = end_slot;
        while let Some((prev, road_idx)) = state.prev[cur] {
            steps.push((prev, road_idx, cur));
            cur = prev;
        }
        steps.reverse();
        let origin = network.city_at(cur).id;

        let legs = steps
            .into_iter()
            .map(|(u, road_idx, v)| {
                let roads = network.roads_at(u);
                let road = roads
                    .iter()
                    .find(|r| r.to_slot == v)
                    .unwrap_or(&roads[road_idx]);
                Leg {
                    from:         road.from,
                    to:           road.to,
                    road_name:    Arc::clone(&road.name),
                    traffic:      road.traffic,
                    road_type:    road.road_type,
                    distance_km:  road.length_km,
                    time_minutes: segment_travel_time_minutes(road.length_km, speed_kmh, road.traffic),
                    fuel_litres:  segment_fuel_litres(road.length_km, speed_kmh, road.road_type),
                }
            })
            .collect();

        RouteResult {
            origin,
            destination:        network.city_at(end_slot).id,
            speed_kmh,
            legs,
            total_time_minutes: state.min_time[end_slot],
            total_distance_km:  state.distance_km[end_slot],
            total_fuel_litres:  state.fuel_litres[end_slot],
        }
    }
}
