//! # Mean orbital elements
//!
//! [`OrbitalElements`] is the per-(body, moment) set of mean elements of a planet, evaluated from
//! the polynomial tables of [`tables`] and immutable once built.
//!
//! ## Overview
//!
//! | element | symbol | unit |
//! |---------|--------|------|
//! | orbital period | P | years |
//! | mean longitude | L | degrees, reduced |
//! | semi-major axis | a | AU |
//! | eccentricity | e | – |
//! | inclination | ι | degrees |
//! | longitude of the ascending node | Ω | degrees |
//! | longitude of the perihelion | π | degrees |
//!
//! Derived quantities are exposed as methods: mean anomaly `M = L − π`, argument of the perihelion
//! `ω = π − Ω`, eccentric anomaly E (Kepler solver) and true anomaly v.
//!
//! The Sun and the Moon have no entry in the tables and are rejected with
//! [`AstroError::NoOrbitalElements`].

use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::body::Body;
use crate::constants::horner;
use crate::kepler::{solve_kepler_equation, true_anomaly, KeplerSolution};
use crate::settings::SolverSettings;
use crate::time::Moment;
use crate::units::{AstronomicalUnits, Degrees, Radians};

mod tables;

use tables::element_table;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub body: Body,
    /// Sidereal period, in Julian years.
    pub period: f64,
    pub mean_longitude: Degrees,
    pub semi_major_axis: AstronomicalUnits,
    pub eccentricity: f64,
    pub inclination: Degrees,
    pub ascending_node: Degrees,
    pub perihelion_longitude: Degrees,
}

impl OrbitalElements {
    /// Evaluate the mean elements of a planet at a moment (dynamical time).
    ///
    /// Arguments
    /// ---------
    /// * `body`: one of the eight planets.
    /// * `moment`: evaluation instant.
    ///
    /// Returns
    /// --------
    /// * The elements, or [`AstroError::NoOrbitalElements`] for the Sun and the Moon.
    pub fn new(body: Body, moment: &Moment) -> Result<Self, AstroError> {
        let table =
            element_table(body).ok_or_else(|| AstroError::NoOrbitalElements(body.to_string()))?;
        let t = moment.t();

        Ok(OrbitalElements {
            body,
            period: table.period,
            mean_longitude: Degrees::new(horner(&table.mean_longitude, t)).reduce(),
            semi_major_axis: AstronomicalUnits::new(horner(&table.semi_major_axis, t)),
            eccentricity: horner(&table.eccentricity, t),
            inclination: Degrees::new(horner(&table.inclination, t)),
            ascending_node: Degrees::new(horner(&table.ascending_node, t)),
            perihelion_longitude: Degrees::new(horner(&table.perihelion, t)),
        })
    }

    /// Mean anomaly M = L − π, in `[0°, 360°)`.
    pub fn mean_anomaly(&self) -> Degrees {
        (self.mean_longitude - self.perihelion_longitude).reduce()
    }

    /// Argument of the perihelion ω = π − Ω.
    pub fn argument_of_perihelion(&self) -> Degrees {
        self.perihelion_longitude - self.ascending_node
    }

    pub fn eccentric_anomaly(&self, settings: &SolverSettings) -> Result<KeplerSolution, AstroError> {
        solve_kepler_equation(self.mean_anomaly().to_radians(), self.eccentricity, settings)
    }

    /// True anomaly v, in `[0°, 360°)`.
    pub fn true_anomaly(&self, settings: &SolverSettings) -> Result<Degrees, AstroError> {
        let solution = self.eccentric_anomaly(settings)?;
        Ok(true_anomaly(solution.eccentric_anomaly, self.eccentricity)
            .to_degrees()
            .reduce())
    }

    /// Position in the orbital plane (x′ towards the perihelion), in AU, for an eccentric anomaly.
    pub(crate) fn orbital_plane_position(&self, eccentric_anomaly: Radians) -> (f64, f64) {
        let a = self.semi_major_axis.value();
        let e = self.eccentricity;
        (
            a * (eccentric_anomaly.cos() - e),
            a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin(),
        )
    }
}
