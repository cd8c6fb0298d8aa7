//! # Astrolabe
//!
//! Positional astronomy for the Sun, the Moon and the major planets: apparent places, sidereal time
//! and horizon coordinates, lunar phases and solar eclipses, computed from mean orbital elements,
//! truncated periodic series and the IAU 1980 nutation theory.
//!
//! ## Overview
//!
//! - [`time`] – calendar moments, Julian Ephemeris Days, date ranges and the ΔT collaborator.
//! - [`units`] – typed angles (degrees, radians, sexagesimal, right ascension) and distances.
//! - [`orbital_elements`] and [`kepler`] – mean elements and the Kepler equation.
//! - [`heliocentric`] and [`geocentric`] – heliocentric coordinates, light-time corrected
//!   geocentric positions.
//! - [`earth_orientation`] – nutation and obliquity of the ecliptic.
//! - [`sidereal_time`] and [`ref_system`] – sidereal time and the ecliptic / equatorial / horizontal
//!   transforms.
//! - [`moon_phase`] and [`solar_eclipse`] – event searches over a date range.
//! - [`sun`], [`moon`], [`jupiter_satellites`], [`saturn_rings`], [`sundial`] – further
//!   low-accuracy theories.
//! - [`astrolabe`] – a façade bundling solver settings and the ΔT provider.
//!
//! Every fallible operation returns [`astro_errors::AstroError`]; the crate logs through the `log`
//! facade and never installs a logger itself.

pub mod astro_errors;
pub mod astrolabe;
pub mod body;
pub mod constants;
pub mod earth_orientation;
pub mod geocentric;
pub mod heliocentric;
pub mod jupiter_satellites;
pub mod kepler;
pub mod moon;
pub mod moon_phase;
pub mod orbital_elements;
pub mod ref_system;
pub mod saturn_rings;
pub mod settings;
pub mod sidereal_time;
pub mod solar_eclipse;
pub mod sun;
pub mod sundial;
pub mod time;
pub mod units;

pub use astro_errors::{AstroError, ErrorKind};
pub use astrolabe::Astrolabe;
pub use body::Body;
pub use time::{DateRange, Moment};
