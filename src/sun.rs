//! # Solar coordinates (low accuracy)
//!
//! Position of the Sun from its geometric mean elements and the equation of the centre, accurate to
//! about 0.01° (Meeus, *Astronomical Algorithms*, chapter 25). This is independent of the
//! orbital-element pipeline of [`crate::geocentric`] and is the solar theory the eclipse search
//! takes its mean anomaly from.

use serde::{Deserialize, Serialize};

use crate::constants::horner;
use crate::ref_system::{EclipticCoordinates, EquatorialCoordinates};
use crate::time::Moment;
use crate::units::{AstronomicalUnits, Degrees};

/// Mean anomaly of the Sun, reduced, at `t` Julian centuries from J2000.0.
pub fn mean_anomaly(t: f64) -> Degrees {
    Degrees::new(horner(&[357.52911, 35999.05029, -0.0001537], t)).reduce()
}

/// Eccentricity of the Earth's orbit.
pub fn earth_eccentricity(t: f64) -> f64 {
    horner(&[0.016708634, -0.000042037, -0.0000001267], t)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Geometric true longitude ☉, mean equinox of date.
    pub true_longitude: Degrees,
    pub mean_anomaly: Degrees,
    pub true_anomaly: Degrees,
    /// Distance Earth–Sun.
    pub radius: AstronomicalUnits,
    /// Longitude corrected for nutation and aberration.
    pub apparent_longitude: Degrees,
    /// Mean obliquity corrected for the main nutation term.
    pub apparent_obliquity: Degrees,
    pub equatorial: EquatorialCoordinates,
}

impl SolarPosition {
    /// Solar coordinates at a moment (dynamical time).
    ///
    /// Arguments
    /// ---------
    /// * `moment`: evaluation instant.
    ///
    /// Returns
    /// --------
    /// * The geometric and apparent position of the Sun.
    ///
    /// # See also
    /// * [`crate::geocentric::GeocentricPosition`] – the Sun through the planetary elements of the
    ///   Earth, with the full nutation series.
    pub fn new(moment: &Moment) -> Self {
        let t = moment.t();

        let mean_longitude = Degrees::new(horner(&[280.46646, 36000.76983, 0.0003032], t)).reduce();
        let m = mean_anomaly(t);
        let center = Degrees::new(
            horner(&[1.914602, -0.004817, -0.000014], t) * m.sin()
                + horner(&[0.019993, -0.000101], t) * (m * 2.0).sin()
                + 0.000289 * (m * 3.0).sin(),
        );

        let true_longitude = mean_longitude + center;
        let true_anomaly = m + center;
        let e = earth_eccentricity(t);
        let radius = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

        let omega = Degrees::new(125.04 - 1934.136 * t);
        let apparent_longitude =
            (true_longitude - Degrees::new(0.00569 + 0.00478 * omega.sin())).reduce();

        let mean_obliquity =
            Degrees::from_arcseconds(horner(&[84381.448, -46.8150, -0.00059, 0.001813], t));
        let apparent_obliquity = mean_obliquity + Degrees::new(0.00256 * omega.cos());

        let equatorial = EclipticCoordinates::new(apparent_longitude, Degrees::new(0.0))
            .to_equatorial(apparent_obliquity);

        SolarPosition {
            true_longitude: true_longitude.reduce(),
            mean_anomaly: m,
            true_anomaly: true_anomaly.reduce(),
            radius: AstronomicalUnits::new(radius),
            apparent_longitude,
            apparent_obliquity,
            equatorial,
        }
    }
}
