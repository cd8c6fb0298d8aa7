//! # Geocentric positions
//!
//! Apparent place of a body seen from the centre of the Earth: ecliptic (λ, β) and equatorial
//! (α, δ) coordinates, corrected for light time and nutation in longitude.
//!
//! ## Overview
//!
//! 1. The Earth's heliocentric vector **E** is evaluated once, at the requested moment t.
//! 2. The body's heliocentric vector **P**(t) gives the true geocentric vector **P** − **E** and the
//!    true distance Δt.
//! 3. Light time τ = 0.0057755183 · Δ days. **P** is recomputed at t − τ, Δ and τ are updated, and
//!    the loop stops when two successive τ agree to a relative
//!    [`SolverSettings::light_time_tolerance`]. It fails with
//!    [`AstroError::LightTimeNotConverged`] after
//!    [`SolverSettings::light_time_max_iterations`] steps.
//! 4. `λ = atan2(Y, X) + Δψ` (reduced), `β = atan2(Z, √(X² + Y²))`, and (λ, β) are rotated to
//!    (α, δ) by the true obliquity ε.
//!
//! The Sun is handled as the body at the heliocentric origin (its vector is **−E** and does not
//! move during the light time); the Moon goes through the lunar series of [`crate::moon`], which
//! is already geocentric. The Earth has no geocentric position.

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::body::Body;
use crate::constants::LIGHT_TIME_DAYS_PER_AU;
use crate::earth_orientation::Nutation;
use crate::heliocentric::planet_position;
use crate::moon::LunarPosition;
use crate::ref_system::{cartesian_to_spherical, EclipticCoordinates, EquatorialCoordinates};
use crate::settings::SolverSettings;
use crate::time::Moment;
use crate::units::{AstronomicalUnits, Degrees};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocentricPosition {
    pub body: Body,
    /// Apparent ecliptic coordinates (λ includes the nutation in longitude).
    pub ecliptic: EclipticCoordinates,
    pub equatorial: EquatorialCoordinates,
    /// True obliquity ε used for the equatorial rotation.
    pub obliquity: Degrees,
    /// Geometric distance at the requested moment, Δt.
    pub true_distance: AstronomicalUnits,
    /// Light-time corrected distance, Δa.
    pub apparent_distance: AstronomicalUnits,
    /// Light time τ, days.
    pub light_time: f64,
}

/// Converged light-time solution.
struct LightTime {
    vector: Vector3<f64>,
    true_distance: f64,
    tau: f64,
    iterations: usize,
}

impl GeocentricPosition {
    /// Apparent geocentric position of a body at a moment (dynamical time).
    ///
    /// Arguments
    /// ---------
    /// * `body`: any body but the Earth.
    /// * `moment`: evaluation instant.
    /// * `settings`: Kepler and light-time solver settings.
    ///
    /// Returns
    /// --------
    /// * The position, or
    ///   - [`AstroError::NotGeocentric`] for the Earth,
    ///   - [`AstroError::KeplerNotConverged`] / [`AstroError::LightTimeNotConverged`] when a solver
    ///     reaches its iteration cap.
    ///
    /// # See also
    /// * [`GeocentricPosition::with_nutation`] – reuse a nutation already computed for `moment`.
    pub fn new(body: Body, moment: &Moment, settings: &SolverSettings) -> Result<Self, AstroError> {
        Self::with_nutation(body, moment, &Nutation::new(moment), settings)
    }

    pub fn with_nutation(
        body: Body,
        moment: &Moment,
        nutation: &Nutation,
        settings: &SolverSettings,
    ) -> Result<Self, AstroError> {
        let solution = match body {
            Body::Earth => return Err(AstroError::NotGeocentric(body.to_string())),
            Body::Moon => solve_light_time(moment, settings, |m| {
                Ok(LunarPosition::from_centuries(m.t()).to_rectangular())
            })?,
            Body::Sun => {
                let earth = planet_position(Body::Earth, moment, settings)?;
                solve_light_time(moment, settings, |_| Ok(-earth))?
            }
            _ => {
                let earth = planet_position(Body::Earth, moment, settings)?;
                solve_light_time(moment, settings, |m| {
                    Ok(planet_position(body, m, settings)? - earth)
                })?
            }
        };
        debug!(
            "{body} light time converged in {} iterations: tau = {} d",
            solution.iterations, solution.tau
        );

        let (longitude, latitude, apparent_distance) = cartesian_to_spherical(&solution.vector);
        let ecliptic = EclipticCoordinates::new(
            (longitude + nutation.longitude_correction()).reduce(),
            latitude,
        );

        Ok(GeocentricPosition {
            body,
            ecliptic,
            equatorial: ecliptic.to_equatorial(nutation.true_obliquity),
            obliquity: nutation.true_obliquity,
            true_distance: AstronomicalUnits::new(solution.true_distance),
            apparent_distance: AstronomicalUnits::new(apparent_distance),
            light_time: solution.tau,
        })
    }
}

/// Fixed-point iteration on the light time τ.
///
/// `geocentric_at` returns the geocentric vector (AU) of the body for the body's position at the
/// given moment, the observer staying at `moment`.
fn solve_light_time<F>(
    moment: &Moment,
    settings: &SolverSettings,
    geocentric_at: F,
) -> Result<LightTime, AstroError>
where
    F: Fn(&Moment) -> Result<Vector3<f64>, AstroError>,
{
    let true_distance = geocentric_at(moment)?.norm();
    let mut tau = LIGHT_TIME_DAYS_PER_AU * true_distance;

    for iteration in 1..=settings.light_time_max_iterations {
        let vector = geocentric_at(&moment.add_days(-tau)?)?;
        let next = LIGHT_TIME_DAYS_PER_AU * vector.norm();

        if (next - tau).abs() <= settings.light_time_tolerance * next.abs() {
            return Ok(LightTime {
                vector,
                true_distance,
                tau: next,
                iterations: iteration,
            });
        }
        tau = next;
    }

    Err(AstroError::LightTimeNotConverged(
        settings.light_time_max_iterations,
    ))
}
