//! `nav-core` — foundational types and cost model for the `rust_nav` route
//! planner.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and a single required external one (`thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `CityId`                                                  |
//! | [`road`]    | `TrafficLevel`, `RoadType`                                |
//! | [`cost`]    | Travel-time and fuel functions for one road segment       |
//! | [`config`]  | `NavConfig`, `FuelKind`                                   |
//! | [`error`]   | `NavError`, `NavResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod road;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FuelKind, NavConfig};
pub use cost::{
    fuel_efficiency_km_per_litre, segment_fuel_litres, segment_travel_time_minutes,
    traffic_time_multiplier, traffic_time_multiplier_for_code,
};
pub use error::{NavError, NavResult};
pub use ids::CityId;
pub use road::{RoadType, TrafficLevel};
