//! # Heliocentric coordinates
//!
//! Heliocentric ecliptic longitude L, latitude B and radius vector R of a planet, referred to the
//! ecliptic and equinox of date. Two planetary theories are available, selected by
//! [`SolverSettings::heliocentric_theory`]:
//!
//! ## [`HeliocentricTheory::Vsop87`] (default)
//!
//! The VSOP87D periodic series (Bretagnon & Francou), evaluated in Julian millennia from J2000.0.
//! This is the theory behind the apparent places of [`crate::geocentric`].
//!
//! ## [`HeliocentricTheory::MeanElements`]
//!
//! Reduction of the mean [`OrbitalElements`]:
//!
//! 1. Solve Kepler's equation for the eccentric anomaly E.
//! 2. Position in the orbital plane, x′ towards the perihelion:
//!    `x′ = a (cos E − e)`, `y′ = a √(1 − e²) sin E`.
//! 3. Rotate into the ecliptic frame: `r = Rz(Ω) · Rx(ι) · Rz(ω) · (x′, y′, 0)`.
//! 4. Convert `r` to spherical coordinates (L, B, R).
//!
//! In both theories every planet goes through the same code path; the body only selects the
//! coefficient table.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use vsop87::{vsop87d, SphericalCoordinates};

use crate::astro_errors::AstroError;
use crate::body::Body;
use crate::orbital_elements::OrbitalElements;
use crate::ref_system::{cartesian_to_spherical, rotmt, spherical_to_cartesian, Axis};
use crate::settings::SolverSettings;
use crate::time::Moment;
use crate::units::{AstronomicalUnits, Degrees, Radians};

/// Planetary theory used for heliocentric positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeliocentricTheory {
    /// VSOP87D series, heliocentric spherical coordinates for the equinox of date.
    #[default]
    Vsop87,
    /// Mean orbital elements and Kepler's equation.
    MeanElements,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricCoordinates {
    pub body: Body,
    /// Ecliptic longitude L, in `[0°, 360°)`.
    pub longitude: Degrees,
    /// Ecliptic latitude B.
    pub latitude: Degrees,
    /// Radius vector R.
    pub radius: AstronomicalUnits,
}

impl HeliocentricCoordinates {
    /// Heliocentric coordinates of a planet at a moment (dynamical time).
    ///
    /// Arguments
    /// ---------
    /// * `body`: one of the eight planets.
    /// * `moment`: evaluation instant.
    /// * `settings`: planetary theory, and for mean elements the Kepler solver tolerance and
    ///   iteration cap.
    ///
    /// Returns
    /// --------
    /// * The coordinates, or
    ///   - [`AstroError::NoOrbitalElements`] for the Sun and the Moon,
    ///   - [`AstroError::KeplerNotConverged`] if the anomaly solver hits its cap.
    ///
    /// # See also
    /// * [`HeliocentricCoordinates::from_vsop87`]
    /// * [`HeliocentricCoordinates::from_elements`]
    pub fn new(body: Body, moment: &Moment, settings: &SolverSettings) -> Result<Self, AstroError> {
        match settings.heliocentric_theory {
            HeliocentricTheory::Vsop87 => Self::from_vsop87(body, moment),
            HeliocentricTheory::MeanElements => {
                Self::from_elements(&OrbitalElements::new(body, moment)?, settings)
            }
        }
    }

    /// Evaluate the VSOP87D series of a planet at `moment`.
    pub fn from_vsop87(body: Body, moment: &Moment) -> Result<Self, AstroError> {
        let series: fn(f64) -> SphericalCoordinates = match body {
            Body::Mercury => vsop87d::mercury,
            Body::Venus => vsop87d::venus,
            Body::Earth => vsop87d::earth,
            Body::Mars => vsop87d::mars,
            Body::Jupiter => vsop87d::jupiter,
            Body::Saturn => vsop87d::saturn,
            Body::Uranus => vsop87d::uranus,
            Body::Neptune => vsop87d::neptune,
            Body::Sun | Body::Moon => {
                return Err(AstroError::NoOrbitalElements(body.to_string()))
            }
        };
        let lbr = series(moment.jde());

        Ok(HeliocentricCoordinates {
            body,
            longitude: Radians::new(lbr.longitude()).to_degrees().reduce(),
            latitude: Radians::new(lbr.latitude()).to_degrees(),
            radius: AstronomicalUnits::new(lbr.distance()),
        })
    }

    pub fn from_elements(
        elements: &OrbitalElements,
        settings: &SolverSettings,
    ) -> Result<Self, AstroError> {
        let position = ecliptic_position(elements, settings)?;
        let (longitude, latitude, radius) = cartesian_to_spherical(&position);

        Ok(HeliocentricCoordinates {
            body: elements.body,
            longitude,
            latitude,
            radius: AstronomicalUnits::new(radius),
        })
    }

    /// Rectangular ecliptic coordinates (x, y, z), in AU.
    pub fn to_rectangular(&self) -> Vector3<f64> {
        spherical_to_cartesian(self.longitude, self.latitude, self.radius.value())
    }
}

/// Rectangular heliocentric ecliptic position of a planet, in AU.
pub(crate) fn ecliptic_position(
    elements: &OrbitalElements,
    settings: &SolverSettings,
) -> Result<Vector3<f64>, AstroError> {
    let solution = elements.eccentric_anomaly(settings)?;
    let (x, y) = elements.orbital_plane_position(solution.eccentric_anomaly);

    let to_ecliptic = rotmt(elements.ascending_node.to_radians(), Axis::Z)
        * rotmt(elements.inclination.to_radians(), Axis::X)
        * rotmt(elements.argument_of_perihelion().to_radians(), Axis::Z);

    Ok(to_ecliptic * Vector3::new(x, y, 0.0))
}

/// Rectangular heliocentric position of a planet at a moment, in the configured theory.
pub(crate) fn planet_position(
    body: Body,
    moment: &Moment,
    settings: &SolverSettings,
) -> Result<Vector3<f64>, AstroError> {
    match settings.heliocentric_theory {
        HeliocentricTheory::Vsop87 => {
            Ok(HeliocentricCoordinates::from_vsop87(body, moment)?.to_rectangular())
        }
        HeliocentricTheory::MeanElements => {
            ecliptic_position(&OrbitalElements::new(body, moment)?, settings)
        }
    }
}
