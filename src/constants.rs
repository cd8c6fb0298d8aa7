//! # Constants and type definitions for astrolabe
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `astrolabe` library.
//!
//! ## Overview
//!
//! - Astronomical constants (J2000.0 epoch, Julian century, astronomical unit, light time)
//! - Unit conversions (arcseconds to radians, days to seconds)
//! - Lunar constants shared by the moon-phase and eclipse searches
//! - Core type aliases used across the crate
//!
//! These definitions are used by every module, from the calendar arithmetic in
//! [`time`](crate::time) up to the event searches in [`moon_phase`](crate::moon_phase)
//! and [`solar_eclipse`](crate::solar_eclipse).

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of milliseconds in a Julian day
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Light-travel time for one astronomical unit, in days
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.0057755183;

// -------------------------------------------------------------------------------------------------
// Lunar constants
// -------------------------------------------------------------------------------------------------

/// Mean synodic month in days, used to step through a date range one lunation at a time
pub const SYNODIC_MONTH: f64 = 29.53058770576;

/// Number of lunations per Julian year, used to estimate the lunation index k
pub const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Lunations per Julian century (T = k / 1236.85)
pub const LUNATIONS_PER_CENTURY: f64 = 1236.85;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian Ephemeris Day
pub type JDE = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Evaluate a polynomial given by its coefficients in increasing order of power.
///
/// The polynomial is evaluated with **Horner’s method**:
///
/// ```text
/// c[0] + c[1]·x + c[2]·x² + … = ((… c[n]·x + c[n-1])·x + …)·x + c[0]
/// ```
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}
