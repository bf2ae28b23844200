//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so applications can swap in
//! other search strategies (A*, bidirectional search) without touching the
//! network or the presentation layer.
//!
//! # Cost units
//!
//! Edge weights are travel **minutes** (`f64`) from
//! [`segment_travel_time_minutes`], which already includes the traffic
//! multiplier.  Distance and fuel are accumulated alongside the time of the
//! best known path but never influence which path wins.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use ordered_float::OrderedFloat;

use nav_core::{segment_fuel_litres, segment_travel_time_minutes, CityId};

use crate::network::RoadNetwork;
use crate::route::RouteResult;
use crate::RouteError;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  A query only reads the network and
/// allocates its own search state, so one router may serve many queries.
pub trait Router: Send + Sync {
    /// Fastest route from `start` to `end` driving at a constant `speed_kmh`.
    ///
    /// `start == end` yields a route with no legs and zero totals.
    fn route(
        &self,
        network: &RoadNetwork,
        start: CityId,
        end: CityId,
        speed_kmh: f64,
    ) -> Result<RouteResult, RouteError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Label-setting search over travel time.
///
/// Uses a binary heap without decrease-key: improved cities are pushed again
/// and outdated entries are skipped when popped.  Heap ties are broken by
/// push order, so equal-time paths resolve the same way on every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        start: CityId,
        end: CityId,
        speed_kmh: f64,
    ) -> Result<RouteResult, RouteError> {
        let start_slot = network.slot(start).ok_or(RouteError::InvalidCity(start))?;
        let end_slot   = network.slot(end).ok_or(RouteError::InvalidCity(end))?;
        if !(speed_kmh.is_finite() && speed_kmh > 0.0) {
            return Err(RouteError::InvalidSpeed(speed_kmh));
        }

        debug!("routing {start} -> {end} at {speed_kmh} km/h");
        let state = search(network, start_slot, speed_kmh);

        if state.min_time[end_slot].is_infinite() {
            debug!("{end} is unreachable from {start}");
            return Err(RouteError::Unreachable { from: start, to: end });
        }

        let route = RouteResult::from_search(network, &state, end_slot, speed_kmh);
        debug!(
            "route {start} -> {end}: {} legs, {:.1} min, {} km",
            route.legs.len(),
            route.total_time_minutes,
            route.total_distance_km
        );
        Ok(route)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Per-query labels, indexed by network slot.
pub(crate) struct SearchState {
    /// Best known travel time in minutes; `INFINITY` until reached.
    pub min_time:    Vec<f64>,
    /// `(predecessor slot, index of the relaxing road in its adjacency)`.
    pub prev:        Vec<Option<(usize, usize)>>,
    /// Kilometres along the best known path.
    pub distance_km: Vec<f64>,
    /// Litres along the best known path.
    pub fuel_litres: Vec<f64>,
}

impl SearchState {
    fn new(n: usize) -> Self {
        Self {
            min_time:    vec![f64::INFINITY; n],
            prev:        vec![None; n],
            distance_km: vec![0.0; n],
            fuel_litres: vec![0.0; n],
        }
    }
}

/// Run the search from `start_slot` until the heap is exhausted.
fn search(network: &RoadNetwork, start_slot: usize, speed_kmh: f64) -> SearchState {
    let mut state = SearchState::new(network.city_count());
    state.min_time[start_slot] = 0.0;

    // Min-heap: (time, push sequence, slot).  Reverse turns BinaryHeap (max)
    // into a min-heap; the sequence number makes equal times pop FIFO.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, u64, usize)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((OrderedFloat(0.0), seq, start_slot)));

    while let Some(Reverse((OrderedFloat(time), _, slot))) = heap.pop() {
        // Skip stale heap entries.
        if time > state.min_time[slot] {
            continue;
        }

        let current = state.min_time[slot];
        for (road_idx, road) in network.roads_at(slot).iter().enumerate() {
            let next = road.to_slot;
            let candidate =
                current + segment_travel_time_minutes(road.length_km, speed_kmh, road.traffic);

            if candidate < state.min_time[next] {
                trace!(
                    "relax {} -> {} via {:?}: {:.3} min",
                    road.from, road.to, road.name, candidate
                );
                state.min_time[next]    = candidate;
                state.prev[next]        = Some((slot, road_idx));
                state.distance_km[next] = state.distance_km[slot] + road.length_km;
                state.fuel_litres[next] = state.fuel_litres[slot]
                    + segment_fuel_litres(road.length_km, speed_kmh, road.road_type);

                seq += 1;
                heap.push(Reverse((OrderedFloat(candidate), seq, next)));
            }
        }
    }

    state
}
