//! CSV network loader.
//!
//! # CSV format
//!
//! Two files.  Cities, one row per city:
//!
//! ```csv
//! city_id,name
//! 1,Karachi
//! 2,Hyderabad
//! ```
//!
//! Roads, one row per undirected road:
//!
//! ```csv
//! from,to,distance_km,traffic,road_type,name
//! 1,2,165,jammed,motorway,M-9 Motorway
//! ```
//!
//! **`traffic`** field:
//!
//! | Value                      | Meaning                      |
//! |----------------------------|------------------------------|
//! | `clear` / `low`            | `TrafficLevel::Clear`        |
//! | `moderate`                 | `TrafficLevel::Moderate`     |
//! | `heavy` / `high`           | `TrafficLevel::Heavy`        |
//! | `jammed`                   | `TrafficLevel::Jammed`       |
//! | *u8* `0..=3`               | level by code                |
//!
//! Anything else is logged and loaded as `Clear` (no delay).  **`road_type`**
//! must be `motorway`, `highway` or `local`.  Labels are case-insensitive
//! and fields are trimmed.

use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use nav_core::{CityId, RoadType, TrafficLevel};

use crate::error::{NetworkError, NetworkResult};
use crate::network::{RoadNetwork, RoadNetworkBuilder};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    city_id: u32,
    name:    String,
}

#[derive(Deserialize)]
struct RoadRecord {
    from:        u32,
    to:          u32,
    distance_km: f64,
    traffic:     String,
    road_type:   String,
    name:        String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a cities CSV file and a roads CSV file.
pub fn load_network_csv(cities: &Path, roads: &Path) -> NetworkResult<RoadNetwork> {
    let cities_file = std::fs::File::open(cities)?;
    let roads_file = std::fs::File::open(roads)?;
    load_network_reader(cities_file, roads_file)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for networks embedded in
/// the binary.
pub fn load_network_reader<C: Read, R: Read>(cities: C, roads: R) -> NetworkResult<RoadNetwork> {
    let mut builder = RoadNetworkBuilder::new();

    // ── Cities ────────────────────────────────────────────────────────────
    for (row, result) in csv_reader(cities).deserialize::<CityRecord>().enumerate() {
        let rec = result.map_err(|e| NetworkError::Parse(format!("cities row {}: {e}", row + 1)))?;
        builder.add_city(CityId(rec.city_id), rec.name)?;
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    for (row, result) in csv_reader(roads).deserialize::<RoadRecord>().enumerate() {
        let rec = result.map_err(|e| NetworkError::Parse(format!("roads row {}: {e}", row + 1)))?;
        let road_type: RoadType = rec.road_type.parse()?;
        let traffic = parse_traffic(&rec.traffic, &rec.name);
        builder.add_road(
            CityId(rec.from),
            CityId(rec.to),
            rec.distance_km,
            traffic,
            road_type,
            rec.name,
        )?;
    }

    info!(
        "loaded road network: {} cities, {} roads",
        builder.city_count(),
        builder.road_count()
    );
    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_traffic(raw: &str, road: &str) -> TrafficLevel {
    let parsed = TrafficLevel::from_label(raw).or_else(|| {
        raw.trim().parse::<u8>().ok().and_then(TrafficLevel::from_code)
    });
    parsed.unwrap_or_else(|| {
        warn!("road {road:?}: unknown traffic level {raw:?}, assuming clear");
        TrafficLevel::Clear
    })
}
