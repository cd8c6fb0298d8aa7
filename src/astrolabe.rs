//! # Astrolabe: solver settings and ΔT provider
//!
//! This module defines [`Astrolabe`], the façade that bundles the two pieces of configuration every
//! high-level computation needs:
//!
//! 1. **Solver settings** ([`SolverSettings`]) – tolerances and iteration caps of the Kepler and
//!    light-time loops.
//! 2. **ΔT provider** ([`DeltaT`]) – the TT − UT collaborator used whenever a result has to be
//!    expressed in universal time (moon phases, eclipses, satellite configurations).
//!
//! Each method is a thin, stateless wrapper over the module that implements it; the façade holds no
//! cache and can be shared freely between threads when the ΔT provider allows it.
//!
//! ## Typical usage
//!
//! ```rust
//! use astrolabe::astrolabe::Astrolabe;
//! use astrolabe::body::Body;
//! use astrolabe::time::{DateRange, Moment};
//!
//! let astrolabe = Astrolabe::new();
//!
//! let moment = Moment::from_date(1992, 12, 20).unwrap();
//! let venus = astrolabe.geocentric(Body::Venus, &moment).unwrap();
//! assert_eq!(venus.equatorial.right_ascension_hms().unwrap().hours(), 21);
//!
//! let range = DateRange::from_dates((2024, 1, 1), (2024, 12, 31)).unwrap();
//! let eclipses = astrolabe.solar_eclipses(&range).unwrap();
//! assert_eq!(eclipses.len(), 2);
//! ```
//!
//! ## See also
//! * [`crate::geocentric`] – apparent positions and light time.
//! * [`crate::moon_phase`] / [`crate::solar_eclipse`] – date-range searches.

use crate::astro_errors::AstroError;
use crate::body::Body;
use crate::earth_orientation::Nutation;
use crate::geocentric::GeocentricPosition;
use crate::heliocentric::HeliocentricCoordinates;
use crate::jupiter_satellites::{galilean_satellites, SatellitePosition};
use crate::moon_phase::{moon_phases, MoonPhase};
use crate::ref_system::{EquatorialCoordinates, HorizontalCoordinates, Observer};
use crate::saturn_rings::ring_position_angle;
use crate::settings::SolverSettings;
use crate::sidereal_time::SiderealTime;
use crate::solar_eclipse::{solar_eclipses, SolarEclipse};
use crate::sun::SolarPosition;
use crate::sundial::{hour_lines, HourLine};
use crate::time::{DateRange, DeltaT, EspenakMeeus, Moment};
use crate::units::Degrees;

#[derive(Debug, Clone, Default)]
pub struct Astrolabe<D: DeltaT = EspenakMeeus> {
    settings: SolverSettings,
    delta_t: D,
}

impl Astrolabe<EspenakMeeus> {
    /// Default settings and the Espenak & Meeus ΔT polynomials.
    pub fn new() -> Self {
        Astrolabe {
            settings: SolverSettings::default(),
            delta_t: EspenakMeeus,
        }
    }
}

impl<D: DeltaT> Astrolabe<D> {
    /// Construct an [`Astrolabe`] with explicit settings and ΔT provider.
    ///
    /// Arguments
    /// -----------------
    /// * `settings`: solver tolerances and caps, see [`SolverSettings::builder`].
    /// * `delta_t`: any [`DeltaT`], a closure `Fn(f64) -> f64` included.
    pub fn with_delta_t(settings: SolverSettings, delta_t: D) -> Self {
        Astrolabe { settings, delta_t }
    }

    pub fn with_settings(self, settings: SolverSettings) -> Self {
        Astrolabe { settings, ..self }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn delta_t(&self) -> &D {
        &self.delta_t
    }

    /// Convert a universal-time moment to dynamical time with the configured ΔT.
    pub fn to_dynamical(&self, moment: &Moment) -> Result<Moment, AstroError> {
        moment.to_dynamical(&self.delta_t)
    }

    /// Convert a dynamical-time moment to universal time with the configured ΔT.
    pub fn to_universal(&self, moment: &Moment) -> Result<Moment, AstroError> {
        moment.to_universal(&self.delta_t)
    }

    pub fn heliocentric(
        &self,
        body: Body,
        moment: &Moment,
    ) -> Result<HeliocentricCoordinates, AstroError> {
        HeliocentricCoordinates::new(body, moment, &self.settings)
    }

    /// Apparent geocentric position of a body, `moment` in dynamical time.
    pub fn geocentric(&self, body: Body, moment: &Moment) -> Result<GeocentricPosition, AstroError> {
        GeocentricPosition::new(body, moment, &self.settings)
    }

    pub fn nutation(&self, moment: &Moment) -> Nutation {
        Nutation::new(moment)
    }

    /// Greenwich sidereal time, `moment` in universal time.
    pub fn sidereal_time(&self, moment: &Moment) -> SiderealTime {
        SiderealTime::new(moment)
    }

    /// Horizontal coordinates of an object for an observer at a universal-time moment, using the
    /// local mean sidereal time (hour angle `H = θ₀ − L − α`).
    pub fn horizontal(
        &self,
        object: &EquatorialCoordinates,
        observer: &Observer,
        moment: &Moment,
    ) -> HorizontalCoordinates {
        let lmst = self.sidereal_time(moment).local_mean(observer);
        object.to_horizontal(observer, lmst)
    }

    /// Inverse of [`Astrolabe::horizontal`].
    pub fn equatorial(
        &self,
        horizontal: &HorizontalCoordinates,
        observer: &Observer,
        moment: &Moment,
    ) -> EquatorialCoordinates {
        let lmst = self.sidereal_time(moment).local_mean(observer);
        horizontal.to_equatorial(observer, lmst)
    }

    /// Low-accuracy solar coordinates, `moment` in dynamical time.
    pub fn sun(&self, moment: &Moment) -> SolarPosition {
        SolarPosition::new(moment)
    }

    pub fn moon_phases(&self, range: &DateRange) -> Result<Vec<MoonPhase>, AstroError> {
        moon_phases(range, &self.delta_t)
    }

    /// Solar eclipses of the lunations spanned by `range`.
    ///
    /// Short ranges can miss an eclipse late in the range, see
    /// [`crate::solar_eclipse::solar_eclipses`].
    pub fn solar_eclipses(&self, range: &DateRange) -> Result<Vec<SolarEclipse>, AstroError> {
        solar_eclipses(range, &self.delta_t)
    }

    /// Galilean satellites, `moment` in universal time.
    pub fn galilean_satellites(
        &self,
        moment: &Moment,
    ) -> Result<[SatellitePosition; 4], AstroError> {
        galilean_satellites(moment, &self.delta_t)
    }

    /// Position angle of Saturn's rings, `moment` in dynamical time.
    pub fn saturn_ring_position_angle(&self, moment: &Moment) -> Result<Degrees, AstroError> {
        ring_position_angle(moment, &self.settings)
    }

    pub fn sundial(&self, latitude: Degrees) -> Result<Vec<HourLine>, AstroError> {
        hour_lines(latitude)
    }
}
