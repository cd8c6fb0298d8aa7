//! Position angle of Saturn's rings (Meeus, *Astronomical Algorithms*, chapter 45).
//!
//! The position angle P of the minor axis of the ring ellipse, measured from the north towards the
//! east, is the position angle of the ring plane's north pole seen from the Earth. The apparent
//! geocentric place of Saturn comes from [`GeocentricPosition`]; the pole of the ring plane is
//! referred to the ecliptic and equinox of date.

use crate::astro_errors::AstroError;
use crate::body::Body;
use crate::earth_orientation::Nutation;
use crate::geocentric::GeocentricPosition;
use crate::ref_system::EclipticCoordinates;
use crate::settings::SolverSettings;
use crate::time::Moment;
use crate::units::{Degrees, Radians};

/// Position angle P of the minor axis of Saturn's rings, degrees.
///
/// Arguments
/// ---------
/// * `moment`: instant in dynamical time.
/// * `settings`: solver settings of the geocentric reduction.
///
/// Returns
/// --------
/// * P in `(−180°, 180°]`, or the error of the geocentric reduction.
pub fn ring_position_angle(moment: &Moment, settings: &SolverSettings) -> Result<Degrees, AstroError> {
    let t = moment.t();
    let nutation = Nutation::new(moment);
    let saturn = GeocentricPosition::with_nutation(Body::Saturn, moment, &nutation, settings)?;

    // Inclination and ascending node of the ring plane on the ecliptic of date
    let inclination = Degrees::new(28.075216 - 0.012998 * t + 0.000004 * t * t);
    let node = Degrees::new(169.508470 + 1.394681 * t + 0.000412 * t * t);
    let pole_longitude = node - Degrees::new(90.0);
    let pole_latitude = Degrees::new(90.0) - inclination;

    // Geometric place, then aberration of Saturn
    let mut lambda = saturn.ecliptic.longitude - nutation.longitude_correction();
    let mut beta = saturn.ecliptic.latitude;
    lambda += Degrees::new(0.005693 * (pole_longitude - lambda).cos() / beta.cos());
    beta += Degrees::new(0.005693 * (pole_longitude - lambda).sin() * beta.sin());

    let planet = EclipticCoordinates::new(lambda + nutation.longitude_correction(), beta)
        .to_equatorial(nutation.true_obliquity);
    let pole = EclipticCoordinates::new(
        pole_longitude + nutation.longitude_correction(),
        pole_latitude,
    )
    .to_equatorial(nutation.true_obliquity);

    let (alpha, delta) = (planet.right_ascension, planet.declination);
    let (alpha0, delta0) = (pole.right_ascension, pole.declination);
    let p = (delta0.cos() * (alpha0 - alpha).sin()).atan2(
        delta0.sin() * delta.cos() - delta0.cos() * delta.sin() * (alpha0 - alpha).cos(),
    );

    Ok(Radians::new(p).to_degrees())
}

#[cfg(test)]
mod saturn_rings_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_angle() {
        let settings = SolverSettings::default();

        let moment = Moment::from_date(1992, 12, 16).unwrap();
        let p = ring_position_angle(&moment, &settings).unwrap();
        assert_relative_eq!(p.value(), 6.74056, epsilon = 1e-4);

        let moment = Moment::from_date(2024, 1, 15).unwrap();
        let p = ring_position_angle(&moment, &settings).unwrap();
        assert_relative_eq!(p.value(), 5.83403, epsilon = 1e-4);
    }
}
