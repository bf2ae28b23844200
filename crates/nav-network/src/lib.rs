//! `nav-network` — road network, CSV loading, and fastest-route search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `City`, `Road`, `RoadNetwork`, `RoadNetworkBuilder`         |
//! | [`router`]  | `Router` trait, `DijkstraRouter`                            |
//! | [`route`]   | `RouteResult`, `Leg`                                        |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`, `RouteError`            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for the city lookup map.                 |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `nav-core` types.     |
//!
//! # Example
//!
//! ```
//! use nav_core::{CityId, RoadType, TrafficLevel};
//! use nav_network::RoadNetworkBuilder;
//!
//! let mut b = RoadNetworkBuilder::new();
//! b.add_city(CityId(1), "A").unwrap();
//! b.add_city(CityId(2), "B").unwrap();
//! b.add_road(CityId(1), CityId(2), 100.0, TrafficLevel::Jammed, RoadType::Motorway, "M-1")
//!     .unwrap();
//! let net = b.build();
//!
//! let route = net.find_shortest_route(CityId(1), CityId(2), 50.0).unwrap();
//! assert_eq!(route.total_time_minutes, 300.0);
//! ```

pub mod error;
pub mod loader;
pub mod network;
pub mod route;
pub mod router;


pub use error::{NetworkError, NetworkResult, RouteError};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{City, Road, RoadNetwork, RoadNetworkBuilder};
pub use route::{Leg, RouteResult};
pub use router::{DijkstraRouter, Router};
