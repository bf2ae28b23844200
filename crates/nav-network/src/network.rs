//! Road network representation and builder.
//!
//! # Data layout
//!
//! Cities are stored in registration order; a city's position in that order
//! is its **slot**.  A hash map translates the data source's `CityId` into a
//! slot, and per-slot adjacency vectors hold the directed roads leaving each
//! city:
//!
//! ```text
//! slot_of[city_id] = s
//! adjacency[s]     = roads leaving cities[s], in definition order
//! ```
//!
//! Search state is therefore a set of plain `Vec`s indexed by slot, with no
//! upper bound on the number of cities.
//!
//! # Undirected roads
//!
//! Every logical road is stored as two directed entries that share the same
//! length, traffic, type and (reference-counted) name.  There is no API for
//! one-way roads, so every entry always has its reverse.

use std::sync::Arc;

use log::debug;

use nav_core::{CityId, RoadType, TrafficLevel};

use crate::error::{NetworkError, NetworkResult};
use crate::route::RouteResult;
use crate::router::{DijkstraRouter, Router};
use crate::RouteError;

#[cfg(feature = "fx-hash")]
type CityMap<V> = rustc_hash::FxHashMap<CityId, V>;
#[cfg(not(feature = "fx-hash"))]
type CityMap<V> = std::collections::HashMap<CityId, V>;

// ── City / Road ───────────────────────────────────────────────────────────────

/// A registered city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id:   CityId,
    pub name: String,
}

/// One directed traversal of a road.
///
/// Only [`RoadNetworkBuilder::add_road`] creates these, always in pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub from:      CityId,
    pub to:        CityId,
    /// Length in kilometres.  Always finite and positive.
    pub length_km: f64,
    pub traffic:   TrafficLevel,
    pub road_type: RoadType,
    /// Display name, shared with the reverse entry.
    pub name:      Arc<str>,
    /// Slot of `to`, cached for the search's inner loop.
    pub(crate) to_slot: usize,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph with per-city adjacency in definition order.
///
/// Immutable once built; use [`RoadNetworkBuilder`].
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    cities:     Vec<City>,
    slot_of:    CityMap<usize>,
    adjacency:  Vec<Vec<Road>>,
    road_count: usize,
}

impl RoadNetwork {
    /// A network with no cities.  Every query against it fails with
    /// [`RouteError::InvalidCity`].
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of logical (undirected) roads.
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Number of directed road entries (twice [`road_count`](Self::road_count)).
    pub fn directed_road_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn contains(&self, id: CityId) -> bool {
        self.slot_of.contains_key(&id)
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.slot(id).map(|s| &self.cities[s])
    }

    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.city(id).map(|c| c.name.as_str())
    }

    /// All cities in registration order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Directed roads leaving `id`, in definition order.  Empty for unknown
    /// cities.
    pub fn roads_from(&self, id: CityId) -> &[Road] {
        match self.slot(id) {
            Some(s) => &self.adjacency[s],
            None => &[],
        }
    }

    /// First road (in definition order) leading from `from` to `to`.
    pub fn road_between(&self, from: CityId, to: CityId) -> Option<&Road> {
        self.roads_from(from).iter().find(|r| r.to == to)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Fastest route from `start` to `end` at a constant `speed_kmh`, using
    /// the default [`DijkstraRouter`].
    pub fn find_shortest_route(
        &self,
        start: CityId,
        end: CityId,
        speed_kmh: f64,
    ) -> Result<RouteResult, RouteError> {
        DijkstraRouter.route(self, start, end, speed_kmh)
    }

    // ── Slot access for the search ────────────────────────────────────────

    #[inline]
    pub(crate) fn slot(&self, id: CityId) -> Option<usize> {
        self.slot_of.get(&id).copied()
    }

    #[inline]
    pub(crate) fn city_at(&self, slot: usize) -> &City {
        &self.cities[slot]
    }

    #[inline]
    pub(crate) fn roads_at(&self, slot: usize) -> &[Road] {
        &self.adjacency[slot]
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Cities must be registered before any road that touches them.
///
/// # Example
///
/// ```
/// use nav_core::{CityId, RoadType, TrafficLevel};
/// use nav_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_city(CityId(1), "Karachi").unwrap();
/// b.add_city(CityId(2), "Hyderabad").unwrap();
/// b.add_road(CityId(1), CityId(2), 165.0, TrafficLevel::Jammed, RoadType::Motorway, "M-9")
///     .unwrap();
/// let net = b.build();
/// assert_eq!(net.city_count(), 2);
/// assert_eq!(net.directed_road_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    cities:     Vec<City>,
    slot_of:    CityMap<usize>,
    adjacency:  Vec<Vec<Road>>,
    road_count: usize,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate for the expected number of cities.
    pub fn with_capacity(cities: usize) -> Self {
        let mut slot_of: CityMap<usize> = CityMap::default();
        slot_of.reserve(cities);
        Self {
            cities: Vec::with_capacity(cities),
            slot_of,
            adjacency: Vec::with_capacity(cities),
            road_count: 0,
        }
    }

    /// Register a city.  Fails if `id` is already registered.
    pub fn add_city(&mut self, id: CityId, name: impl Into<String>) -> NetworkResult<()> {
        if self.slot_of.contains_key(&id) {
            return Err(NetworkError::DuplicateCity(id));
        }
        self.slot_of.insert(id, self.cities.len());
        self.cities.push(City { id, name: name.into() });
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Register an undirected road between `a` and `b`.
    ///
    /// Appends `a → b` to `a`'s roads and `b → a` to `b`'s roads.  Fails if
    /// either endpoint is unregistered or `length_km` is not a positive
    /// finite number.
    pub fn add_road(
        &mut self,
        a: CityId,
        b: CityId,
        length_km: f64,
        traffic: TrafficLevel,
        road_type: RoadType,
        name: impl Into<Arc<str>>,
    ) -> NetworkResult<()> {
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;
        if !(length_km.is_finite() && length_km > 0.0) {
            return Err(NetworkError::InvalidLength { from: a, to: b, length_km });
        }

        let name: Arc<str> = name.into();
        self.adjacency[slot_a].push(Road {
            from: a,
            to: b,
            length_km,
            traffic,
            road_type,
            name: Arc::clone(&name),
            to_slot: slot_b,
        });
        self.adjacency[slot_b].push(Road {
            from: b,
            to: a,
            length_km,
            traffic,
            road_type,
            name,
            to_slot: slot_a,
        });
        self.road_count += 1;
        Ok(())
    }

    pub fn contains(&self, id: CityId) -> bool {
        self.slot_of.contains_key(&id)
    }

    pub fn city_count(&self) -> usize { self.cities.len() }
    pub fn road_count(&self) -> usize { self.road_count }

    /// Consume the builder and produce a [`RoadNetwork`].
    pub fn build(self) -> RoadNetwork {
        debug!(
            "built road network: {} cities, {} roads",
            self.cities.len(),
            self.road_count
        );
        RoadNetwork {
            cities:     self.cities,
            slot_of:    self.slot_of,
            adjacency:  self.adjacency,
            road_count: self.road_count,
        }
    }

    fn slot(&self, id: CityId) -> NetworkResult<usize> {
        self.slot_of.get(&id).copied().ok_or(NetworkError::UnknownCity(id))
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
