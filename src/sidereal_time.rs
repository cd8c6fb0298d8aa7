//! # Sidereal time
//!
//! Greenwich mean and apparent sidereal time of a moment, and the local quantities derived from
//! them for an [`Observer`].
//!
//! ## Overview
//!
//! - GMST follows the IAU 1982 expression in the form given by Meeus (12.4):
//!   `θ₀ = 280.46061837° + 360.98564736629° (JD − 2451545) + 0.000387933° T² − T³ / 38710000`.
//! - GAST adds the equation of the equinoxes `Δψ cos ε / 15` (seconds of time).
//! - Local sidereal times subtract the west-positive longitude of the observer:
//!   `θ = θ₀ − L`, and the hour angle of an object is `H = θ₀ − L − α`.
//!
//! All results are reduced into `[0°, 360°)`.

use serde::{Deserialize, Serialize};

use crate::constants::{horner, J2000};
use crate::earth_orientation::Nutation;
use crate::ref_system::Observer;
use crate::time::Moment;
use crate::units::Degrees;

/// Greenwich mean sidereal time, in degrees.
///
/// Arguments
/// ---------
/// * `moment`: instant in universal time.
///
/// Returns
/// --------
/// * GMST reduced to `[0°, 360°)`.
pub fn gmst(moment: &Moment) -> Degrees {
    const C: [f64; 4] = [280.46061837, 0.0, 0.000387933, -1.0 / 38_710_000.0];
    // Rotation per day kept out of the polynomial to preserve precision on the JD offset
    const RATE: f64 = 360.98564736629;

    let t = moment.t();
    Degrees::new(horner(&C, t) + RATE * (moment.jde() - J2000)).reduce()
}

/// Greenwich sidereal time, mean and apparent, at a moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealTime {
    pub greenwich_mean: Degrees,
    pub greenwich_apparent: Degrees,
}

impl SiderealTime {
    pub fn new(moment: &Moment) -> Self {
        Self::with_nutation(moment, &Nutation::new(moment))
    }

    /// Same as [`SiderealTime::new`] with a nutation already evaluated for that moment.
    pub fn with_nutation(moment: &Moment, nutation: &Nutation) -> Self {
        let greenwich_mean = gmst(moment);
        SiderealTime {
            greenwich_mean,
            greenwich_apparent: (greenwich_mean + nutation.equation_of_equinoxes()).reduce(),
        }
    }

    /// Local mean sidereal time θ₀ − L.
    pub fn local_mean(&self, observer: &Observer) -> Degrees {
        (self.greenwich_mean - observer.longitude).reduce()
    }

    /// Local apparent sidereal time, GAST − L.
    pub fn local_apparent(&self, observer: &Observer) -> Degrees {
        (self.greenwich_apparent - observer.longitude).reduce()
    }

    /// Local hour angle `H = θ₀ − L − α` of an object of right ascension `right_ascension`.
    pub fn hour_angle(&self, observer: &Observer, right_ascension: Degrees) -> Degrees {
        (self.greenwich_mean - observer.longitude - right_ascension).reduce()
    }
}

#[cfg(test)]
mod sidereal_time_test {
    use super::*;
    use crate::units::SexagesimalAngle;
    use approx::assert_relative_eq;

    fn observer(lat: f64, longitude_west: Degrees) -> Observer {
        Observer::new(Degrees::new(lat), longitude_west).unwrap()
    }

    #[test]
    fn test_gmst_at_midnight() {
        let moment = Moment::from_date(1987, 4, 10).unwrap();
        assert_relative_eq!(gmst(&moment).value(), 197.693195090862, epsilon = 1e-8);
        let hms = gmst(&moment).to_right_ascension().unwrap();
        assert_eq!((hms.hours(), hms.minutes()), (13, 10));
        assert_relative_eq!(hms.seconds(), 46.3668, epsilon = 1e-3);
    }

    #[test]
    fn test_gmst_and_gast_in_the_day() {
        let moment = Moment::from_jde(2446896.30625).unwrap();
        let st = SiderealTime::new(&moment);
        assert_relative_eq!(st.greenwich_mean.value(), 128.73787324433215, epsilon = 1e-8);
        assert_relative_eq!(
            st.greenwich_apparent.value(),
            128.73686553683635,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_local_mean_sidereal_time() {
        let moment = Moment::new(2024, 2, 19, 2, 0, 0, 0).unwrap();
        let st = SiderealTime::new(&moment);
        assert_relative_eq!(st.greenwich_mean.value(), 178.53148846, epsilon = 1e-7);

        let longitude = SexagesimalAngle::new(123, 15, 43.34).unwrap().to_degrees();
        let lmst = st.local_mean(&observer(45.0, longitude));
        assert_relative_eq!(lmst.value(), 55.26944957, epsilon = 1e-7);
    }

    #[test]
    fn test_local_apparent_follows_equation_of_equinoxes() {
        let moment = Moment::new(2024, 2, 19, 2, 0, 0, 0).unwrap();
        let nutation = Nutation::new(&moment);
        let st = SiderealTime::with_nutation(&moment, &nutation);
        let obs = observer(-30.0, Degrees::new(-70.0));

        let diff = st.local_apparent(&obs) - st.local_mean(&obs);
        assert_relative_eq!(
            diff.value(),
            nutation.equation_of_equinoxes().value(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_hour_angle() {
        let moment = Moment::new(2024, 7, 4, 17, 0, 0, 0).unwrap();
        let st = SiderealTime::new(&moment);
        // 118°14′38″ E, i.e. a negative west longitude
        let longitude = -SexagesimalAngle::new(118, 14, 38.0).unwrap().to_degrees();
        let h = st.hour_angle(&observer(34.0, longitude), Degrees::new(5.838));
        assert_relative_eq!(h.value(), 290.6014494764589, epsilon = 1e-7);
    }
}
