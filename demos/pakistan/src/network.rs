//! Built-in inter-city network: 15 Pakistani cities and the national
//! motorways and highways between them.

use nav_core::{CityId, RoadType, TrafficLevel};
use nav_network::{NetworkResult, RoadNetwork, RoadNetworkBuilder};

use RoadType::{Highway, Motorway};
use TrafficLevel::{Clear, Heavy, Jammed, Moderate};

const CITIES: [(u32, &str); 15] = [
    (1,  "Karachi"),
    (2,  "Hyderabad"),
    (3,  "Sukkur"),
    (4,  "Multan"),
    (5,  "Faisalabad"),
    (6,  "Lahore"),
    (7,  "Islamabad"),
    (8,  "Peshawar"),
    (9,  "Quetta"),
    (10, "Gwadar"),
    (11, "Sialkot"),
    (12, "Abbottabad"),
    (13, "Gilgit"),
    (14, "Sahiwal"),
    (15, "Bahawalpur"),
];

// (a, b, km, traffic, type, name)
const ROADS: [(u32, u32, f64, TrafficLevel, RoadType, &str); 19] = [
    // South corridor
    (1,  2,  165.0, Jammed,   Motorway, "M-9 Motorway"),
    (2,  3,  330.0, Moderate, Highway,  "N-5 National Hwy"),
    (3,  4,  420.0, Clear,    Motorway, "M-5 Sukkur-Multan"),
    (3,  9,  390.0, Clear,    Highway,  "N-65 Highway"),
    // Central corridor
    (4,  5,  240.0, Clear,    Motorway, "M-4 Motorway"),
    (4,  15, 90.0,  Moderate, Highway,  "N-5 Lodhran"),
    (15, 3,  300.0, Clear,    Highway,  "N-5 South"),
    (4,  14, 180.0, Moderate, Highway,  "N-5 GT Road"),
    (14, 6,  170.0, Heavy,    Highway,  "N-5 Okara"),
    // Punjab grid
    (5,  6,  150.0, Heavy,    Motorway, "M-3 Motorway"),
    (5,  7,  320.0, Clear,    Motorway, "M-4 (Goa-Pindi)"),
    (6,  7,  375.0, Moderate, Motorway, "M-2 Motorway"),
    (6,  11, 130.0, Moderate, Motorway, "M-11 Sialkot"),
    // North corridor
    (7,  8,  180.0, Clear,    Motorway, "M-1 Motorway"),
    (7,  12, 120.0, Heavy,    Highway,  "N-35 Karakoram"),
    (12, 13, 450.0, Heavy,    Highway,  "KKH (Hazara)"),
    // West corridor
    (1,  10, 650.0, Clear,    Highway,  "N-10 Coastal Hwy"),
    (10, 9,  920.0, Clear,    Highway,  "N-85 Highway"),
    (9,  8,  800.0, Clear,    Highway,  "N-50 Zhob Route"),
];

/// Build the 15-city network.
pub fn build_network() -> NetworkResult<RoadNetwork> {
    let mut b = RoadNetworkBuilder::with_capacity(CITIES.len());
    for (id, name) in CITIES {
        b.add_city(CityId(id), name)?;
    }
    for (a, c, km, traffic, kind, name) in ROADS {
        b.add_road(CityId(a), CityId(c), km, traffic, kind, name)?;
    }
    Ok(b.build())
}
