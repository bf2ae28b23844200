//! Cost model for a single road segment.
//!
//! # Units
//!
//! Distances are kilometres, speeds km/h, times minutes, fuel litres.  All
//! arithmetic is plain `f64` with no intermediate rounding; presentation
//! code rounds at the very end.
//!
//! # Fuel efficiency
//!
//! ```text
//! base = 16.0 km/L, minus 4.0 on Local roads
//! speed > 90  : base - (speed - 90)² / 400, never below 5.0
//! speed < 40  : base - 3.0              (no floor)
//! otherwise   : base
//! ```
//!
//! The floor applies only to the high-speed branch.

use crate::{RoadType, TrafficLevel};

pub const BASE_EFFICIENCY_KM_PER_L:  f64 = 16.0;
pub const LOCAL_ROAD_PENALTY_KM_PER_L: f64 = 4.0;
pub const LOW_SPEED_PENALTY_KM_PER_L:  f64 = 3.0;
pub const MIN_HIGH_SPEED_EFFICIENCY_KM_PER_L: f64 = 5.0;

/// Above this speed, aerodynamic drag erodes efficiency quadratically.
pub const HIGH_SPEED_THRESHOLD_KMH: f64 = 90.0;
/// Below this speed, the engine runs outside its efficient range.
pub const LOW_SPEED_THRESHOLD_KMH:  f64 = 40.0;
const DRAG_DIVISOR: f64 = 400.0;

/// Travel-time multiplier for a traffic level.
#[inline]
pub fn traffic_time_multiplier(level: TrafficLevel) -> f64 {
    match level {
        TrafficLevel::Clear    => 1.0,
        TrafficLevel::Moderate => 1.2,
        TrafficLevel::Heavy    => 1.5,
        TrafficLevel::Jammed   => 2.5,
    }
}

/// Like [`traffic_time_multiplier`] for a raw level code.  Unknown codes map
/// to 1.0 (no delay).
#[inline]
pub fn traffic_time_multiplier_for_code(code: u8) -> f64 {
    TrafficLevel::from_code(code).map_or(1.0, traffic_time_multiplier)
}

/// Minutes needed to drive `distance_km` at `speed_kmh` under `level`.
///
/// `speed_kmh` must be positive; the router rejects other speeds before
/// calling this.
#[inline]
pub fn segment_travel_time_minutes(distance_km: f64, speed_kmh: f64, level: TrafficLevel) -> f64 {
    let base = distance_km / speed_kmh * 60.0;
    base * traffic_time_multiplier(level)
}

/// Fuel efficiency in km per litre at a constant `speed_kmh` on `road_type`.
pub fn fuel_efficiency_km_per_litre(speed_kmh: f64, road_type: RoadType) -> f64 {
    let mut base = BASE_EFFICIENCY_KM_PER_L;
    if road_type == RoadType::Local {
        base -= LOCAL_ROAD_PENALTY_KM_PER_L;
    }

    if speed_kmh > HIGH_SPEED_THRESHOLD_KMH {
        let excess = speed_kmh - HIGH_SPEED_THRESHOLD_KMH;
        let drop = excess * excess / DRAG_DIVISOR;
        (base - drop).max(MIN_HIGH_SPEED_EFFICIENCY_KM_PER_L)
    } else if speed_kmh < LOW_SPEED_THRESHOLD_KMH {
        base - LOW_SPEED_PENALTY_KM_PER_L
    } else {
        base
    }
}

/// Litres burned driving `distance_km` at `speed_kmh` on `road_type`.
#[inline]
pub fn segment_fuel_litres(distance_km: f64, speed_kmh: f64, road_type: RoadType) -> f64 {
    distance_km / fuel_efficiency_km_per_litre(speed_kmh, road_type)
}
