//! Categorical road attributes shared by the network, router and output
//! crates.

use std::str::FromStr;

use crate::NavError;

/// Traffic condition on a road.  Scales the nominal travel time; see
/// [`traffic_time_multiplier`](crate::traffic_time_multiplier).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficLevel {
    /// Free-flowing road.
    #[default]
    Clear,
    /// Normal traffic.
    Moderate,
    /// Rush-hour traffic.
    Heavy,
    /// Severe blockage.
    Jammed,
}

impl TrafficLevel {
    /// All levels in declaration (code) order.
    pub const ALL: [TrafficLevel; 4] = [
        TrafficLevel::Clear,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
        TrafficLevel::Jammed,
    ];

    /// Numeric code: position in [`TrafficLevel::ALL`].
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).  `None` for codes outside `0..=3`.
    #[inline]
    pub fn from_code(code: u8) -> Option<TrafficLevel> {
        Self::ALL.get(code as usize).copied()
    }

    /// Parse a case-insensitive label.  Accepts the display labels as well as
    /// the `low`/`high` aliases used by older network files.
    pub fn from_label(label: &str) -> Option<TrafficLevel> {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear" | "low"  => Some(TrafficLevel::Clear),
            "moderate"       => Some(TrafficLevel::Moderate),
            "heavy" | "high" => Some(TrafficLevel::Heavy),
            "jammed"         => Some(TrafficLevel::Jammed),
            _                => None,
        }
    }

    /// Human-readable label, as printed on the route receipt.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Clear    => "Clear",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy    => "Heavy",
            TrafficLevel::Jammed   => "Jammed",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Road category.  Only affects fuel efficiency, never travel time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadType {
    /// High-speed, access-controlled motorway.
    Motorway,
    /// Standard national highway.
    #[default]
    Highway,
    /// Stop-and-go local road.
    Local,
}

impl RoadType {
    /// Parse a case-insensitive label (`motorway`, `highway`, `local`).
    pub fn from_label(label: &str) -> Option<RoadType> {
        match label.trim().to_ascii_lowercase().as_str() {
            "motorway" => Some(RoadType::Motorway),
            "highway"  => Some(RoadType::Highway),
            "local"    => Some(RoadType::Local),
            _          => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadType::Motorway => "Motorway",
            RoadType::Highway  => "Highway",
            RoadType::Local    => "Local",
        }
    }
}

impl FromStr for TrafficLevel {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrafficLevel::from_label(s)
            .ok_or_else(|| NavError::Parse(format!("unknown traffic level {s:?}")))
    }
}

impl FromStr for RoadType {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoadType::from_label(s).ok_or_else(|| {
            NavError::Parse(format!(
                "unknown road type {s:?}: expected \"motorway\", \"highway\" or \"local\""
            ))
        })
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
