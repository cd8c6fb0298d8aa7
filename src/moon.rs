//! # Lunar position
//!
//! Geometric geocentric ecliptic coordinates of the Moon from the main periodic terms of the
//! ELP-2000/82 theory (Meeus, *Astronomical Algorithms*, chapter 47), truncated to the largest
//! terms. Accuracy is of the order of 10″ in longitude and 4″ in latitude.
//!
//! ## Overview
//!
//! Four fundamental arguments (D, M, M′, F) drive three series:
//!
//! - Σl (longitude) and Σr (distance) over [`LONGITUDE_DISTANCE_TERMS`],
//! - Σb (latitude) over [`LATITUDE_TERMS`],
//!
//! every term involving the Sun's mean anomaly M being scaled by `E^|m|`, where E is the
//! eccentricity correction of the Earth's orbit. Additive terms A₁, A₂, A₃ account for Venus,
//! Jupiter and the flattening of the Earth.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{horner, Kilometer, AU};
use crate::ref_system::spherical_to_cartesian;
use crate::units::Degrees;

/// Mean distance of the Moon used as the origin of the distance series, km.
const MEAN_DISTANCE: Kilometer = 385_000.56;

/// Multipliers of (D, M, M′, F), then Σl amplitude (1e-6 degree) and Σr amplitude (1e-3 km).
#[rustfmt::skip]
const LONGITUDE_DISTANCE_TERMS: [([i8; 4], f64, f64); 24] = [
    ([0,  0,  1,  0],  6288774.0, -20905355.0),
    ([2,  0, -1,  0],  1274027.0,  -3699111.0),
    ([2,  0,  0,  0],   658314.0,  -2955968.0),
    ([0,  0,  2,  0],   213618.0,   -569925.0),
    ([0,  1,  0,  0],  -185116.0,     48888.0),
    ([0,  0,  0,  2],  -114332.0,     -3149.0),
    ([2,  0, -2,  0],    58793.0,    246158.0),
    ([2, -1, -1,  0],    57066.0,   -152138.0),
    ([2,  0,  1,  0],    53322.0,   -170733.0),
    ([2, -1,  0,  0],    45758.0,   -204586.0),
    ([0,  1, -1,  0],   -40923.0,   -129620.0),
    ([1,  0,  0,  0],   -34720.0,    108743.0),
    ([0,  1,  1,  0],   -30383.0,         0.0),
    ([2,  0,  0, -2],    15327.0,         0.0),
    ([0,  0,  1,  2],   -12528.0,         0.0),
    ([0,  0,  1, -2],    10980.0,         0.0),
    ([4,  0, -1,  0],    10675.0,         0.0),
    ([0,  0,  3,  0],    10034.0,         0.0),
    ([4,  0, -2,  0],     8548.0,         0.0),
    ([2,  1, -1,  0],    -7888.0,         0.0),
    ([2,  1,  0,  0],    -6766.0,         0.0),
    ([1,  0, -1,  0],    -5163.0,         0.0),
    ([1,  1,  0,  0],     4987.0,         0.0),
    ([2, -1,  1,  0],     4036.0,         0.0),
];

/// Multipliers of (D, M, M′, F), then Σb amplitude (1e-6 degree).
#[rustfmt::skip]
const LATITUDE_TERMS: [([i8; 4], f64); 10] = [
    ([0, 0,  0,  1], 5128122.0),
    ([0, 0,  1,  1],  280602.0),
    ([0, 0,  1, -1],  277693.0),
    ([2, 0,  0, -1],  173237.0),
    ([2, 0, -1,  1],   55413.0),
    ([2, 0, -1, -1],   46271.0),
    ([2, 0,  0,  1],   32573.0),
    ([0, 0,  2,  1],   17198.0),
    ([2, 0,  1, -1],    9266.0),
    ([0, 0,  2, -1],    8822.0),
];

/// Geometric geocentric position of the Moon, referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPosition {
    pub longitude: Degrees,
    pub latitude: Degrees,
    /// Distance between the centres of the Earth and the Moon.
    pub distance: Kilometer,
}

impl LunarPosition {
    /// Evaluate the lunar series at `t` Julian centuries (TT) from J2000.0.
    pub fn from_centuries(t: f64) -> Self {
        let mean_longitude = Degrees::new(horner(
            &[218.3164477, 481267.88123421, -0.0015786, 1.0 / 538841.0, -1.0 / 65194000.0],
            t,
        ))
        .reduce();
        let elongation = Degrees::new(horner(
            &[297.8501921, 445267.1114034, -0.0018819, 1.0 / 545868.0, -1.0 / 113065000.0],
            t,
        ))
        .reduce();
        let sun_anomaly = Degrees::new(horner(
            &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0],
            t,
        ))
        .reduce();
        let moon_anomaly = Degrees::new(horner(
            &[134.9633964, 477198.8675055, 0.0087414, 1.0 / 69699.0, -1.0 / 14712000.0],
            t,
        ))
        .reduce();
        let latitude_argument = Degrees::new(horner(
            &[93.2720950, 483202.0175233, -0.0036539, -1.0 / 3526000.0, 1.0 / 863310000.0],
            t,
        ))
        .reduce();

        let a1 = Degrees::new(119.75 + 131.849 * t).reduce();
        let a2 = Degrees::new(53.09 + 479264.290 * t).reduce();
        let a3 = Degrees::new(313.45 + 481266.484 * t).reduce();
        let e = horner(&[1.0, -0.002516, -0.0000074], t);

        let fundamentals = [elongation, sun_anomaly, moon_anomaly, latitude_argument];
        let argument = |multipliers: &[i8; 4]| {
            multipliers
                .iter()
                .zip(fundamentals)
                .fold(Degrees::new(0.0), |acc, (&k, angle)| acc + angle * k as f64)
        };
        let eccentricity_factor = |multipliers: &[i8; 4]| e.powi(multipliers[1].abs() as i32);

        let (sigma_l, sigma_r) = LONGITUDE_DISTANCE_TERMS.iter().fold(
            (0.0, 0.0),
            |(sl, sr), (multipliers, l_amp, r_amp)| {
                let arg = argument(multipliers);
                let factor = eccentricity_factor(multipliers);
                (
                    sl + l_amp * factor * arg.sin(),
                    sr + r_amp * factor * arg.cos(),
                )
            },
        );
        let sigma_b = LATITUDE_TERMS
            .iter()
            .map(|(multipliers, amp)| {
                amp * eccentricity_factor(multipliers) * argument(multipliers).sin()
            })
            .sum::<f64>();

        let sigma_l = sigma_l
            + 3958.0 * a1.sin()
            + 1962.0 * (mean_longitude - latitude_argument).sin()
            + 318.0 * a2.sin();
        let sigma_b = sigma_b - 2235.0 * mean_longitude.sin()
            + 382.0 * a3.sin()
            + 175.0 * (a1 - latitude_argument).sin()
            + 175.0 * (a1 + latitude_argument).sin()
            + 127.0 * (mean_longitude - moon_anomaly).sin()
            - 115.0 * (mean_longitude + moon_anomaly).sin();

        LunarPosition {
            longitude: (mean_longitude + Degrees::new(sigma_l / 1e6)).reduce(),
            latitude: Degrees::new(sigma_b / 1e6),
            distance: MEAN_DISTANCE + sigma_r / 1000.0,
        }
    }

    /// Geocentric rectangular ecliptic coordinates, in AU.
    pub fn to_rectangular(&self) -> Vector3<f64> {
        spherical_to_cartesian(self.longitude, self.latitude, self.distance / AU)
    }
}
