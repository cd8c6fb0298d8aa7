use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, AU, LIGHT_TIME_DAYS_PER_AU};

/// A distance in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AstronomicalUnits(f64);

impl AstronomicalUnits {
    pub const fn new(value: f64) -> Self {
        AstronomicalUnits(value)
    }

    pub fn from_kilometers(km: Kilometer) -> Self {
        AstronomicalUnits(km / AU)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> Kilometer {
        self.0 * AU
    }

    /// Time taken by light to cover this distance, in days.
    pub fn light_time(self) -> f64 {
        self.0 * LIGHT_TIME_DAYS_PER_AU
    }
}

impl std::fmt::Display for AstronomicalUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} AU", p, self.0),
            None => write!(f, "{} AU", self.0),
        }
    }
}
