//! Network-subsystem error types.

use thiserror::Error;

use nav_core::{CityId, NavError};

/// Errors produced while building or loading a [`RoadNetwork`](crate::RoadNetwork).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("city {0} is not registered")]
    UnknownCity(CityId),

    #[error("city {0} is registered twice")]
    DuplicateCity(CityId),

    #[error("road {from} - {to} has invalid length {length_km} km")]
    InvalidLength { from: CityId, to: CityId, length_km: f64 },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NavError> for NetworkError {
    fn from(e: NavError) -> Self {
        NetworkError::Parse(e.to_string())
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors returned by a route query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("city {0} is not registered")]
    InvalidCity(CityId),

    #[error("speed {0} km/h is not a positive finite number")]
    InvalidSpeed(f64),

    #[error("no road connection exists from {from} to {to}")]
    Unreachable { from: CityId, to: CityId },
}
