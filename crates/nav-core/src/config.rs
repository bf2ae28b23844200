//! Planner configuration consumed by the collaborators around the core.
//!
//! The router never reads this: speed bounds belong to input validation and
//! fuel prices to the receipt.  Applications usually load it from JSON (with
//! the `serde` feature) or start from [`NavConfig::default`].

use crate::{NavError, NavResult};

/// Which pump price the receipt uses to cost the trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FuelKind {
    #[default]
    Petrol,
    Diesel,
}

impl FuelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FuelKind::Petrol => "petrol",
            FuelKind::Diesel => "diesel",
        }
    }
}

impl std::fmt::Display for FuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Fuel the vehicle runs on.
    pub fuel_kind: FuelKind,

    /// Price per litre of petrol, in `currency`.
    pub petrol_price: f64,

    /// Price per litre of diesel, in `currency`.
    pub diesel_price: f64,

    /// Currency label printed next to costs.
    pub currency: String,

    /// Lowest average speed the console accepts (km/h, inclusive).
    pub min_speed_kmh: f64,

    /// Highest average speed the console accepts (km/h, inclusive).
    pub max_speed_kmh: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fuel_kind:     FuelKind::Petrol,
            petrol_price:  280.0,
            diesel_price:  295.0,
            currency:      "PKR".to_owned(),
            min_speed_kmh: 40.0,
            max_speed_kmh: 160.0,
        }
    }
}

impl NavConfig {
    /// Price per litre of the configured fuel kind.
    #[inline]
    pub fn fuel_price(&self) -> f64 {
        match self.fuel_kind {
            FuelKind::Petrol => self.petrol_price,
            FuelKind::Diesel => self.diesel_price,
        }
    }

    /// `true` if `speed_kmh` lies within the accepted input range.
    #[inline]
    pub fn speed_in_range(&self, speed_kmh: f64) -> bool {
        (self.min_speed_kmh..=self.max_speed_kmh).contains(&speed_kmh)
    }

    /// Reject configurations the console could never satisfy.
    pub fn validate(&self) -> NavResult<()> {
        let bounds_ok = self.min_speed_kmh.is_finite()
            && self.max_speed_kmh.is_finite()
            && self.min_speed_kmh > 0.0
            && self.min_speed_kmh <= self.max_speed_kmh;
        if !bounds_ok {
            return Err(NavError::Config(format!(
                "speed bounds must satisfy 0 < min <= max, got {}..={}",
                self.min_speed_kmh, self.max_speed_kmh
            )));
        }
        for (name, price) in [("petrol_price", self.petrol_price), ("diesel_price", self.diesel_price)] {
            if !(price.is_finite() && price >= 0.0) {
                return Err(NavError::Config(format!("{name} must be a non-negative number, got {price}")));
            }
        }
        Ok(())
    }
}
