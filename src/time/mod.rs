//! # Calendar moments and Julian Ephemeris Days
//!
//! This module defines [`Moment`], the instant type every computation in the crate is parameterised
//! by, together with the calendar ↔ Julian Day arithmetic behind it.
//!
//! ## Overview
//!
//! - [`calendar_to_jd`] converts a (year, month, fractional day) triple to a Julian Day, using the
//!   Julian calendar up to 1582-10-04 and the Gregorian calendar from 1582-10-15 on.
//! - [`Moment`] stores both the calendar fields (to the millisecond) and the JDE they map to.
//!   Calendar → JDE → calendar round-trips exactly.
//! - [`DateRange`] is a closed, validated `[start, end]` interval of moments.
//! - [`DeltaT`] is the TT − UTC collaborator, with [`EspenakMeeus`] as the default table.
//!
//! A `Moment` does not carry a time scale. Call sites decide whether it holds dynamical time (TT)
//! or universal time, and convert between them with [`Moment::to_universal`] and
//! [`Moment::to_dynamical`].
//!
//! ## Example
//!
//! ```rust
//! use astrolabe::time::Moment;
//!
//! let j2000 = Moment::from_fractional_day(2000, 1, 1.5).unwrap();
//! assert_eq!(j2000.jde(), 2451545.0);
//! assert_eq!(j2000.hour(), 12);
//! ```

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::astro_errors::{ensure_finite, AstroError};
use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000, JDE, JDTOMJD, MILLISECONDS_PER_DAY, MJD, SECONDS_PER_DAY,
};

mod date_range;
mod delta_t;

pub use date_range::DateRange;
pub use delta_t::{DeltaT, EspenakMeeus};

/// First Julian Day number (at noon) of the Gregorian calendar, 1582-10-15.
const GREGORIAN_START_DAY: f64 = 2_299_161.0;

/// Whether the calendar date falls in the Julian calendar (on or before 1582-10-04).
fn is_julian_calendar(year: i32, month: u32, day: f64) -> bool {
    (year, month) < (1582, 10) || (year == 1582 && month == 10 && day < 5.0)
}

/// Julian Day of a calendar date.
///
/// Arguments
/// ---------
/// * `year`: astronomical year (year 0 = 1 BC).
/// * `month`: 1..=12
/// * `day`: day of the month, the fractional part being the fraction of the day since 0h.
///
/// Returns
/// --------
/// * The Julian Day. No validation is performed: use [`Moment::new`] for checked input.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> JDE {
    let julian = is_julian_calendar(year, month, day);

    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let b = if julian {
        0.0
    } else {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Calendar date (year, month, day) of a Julian Day number `z` (the integer day starting at noon of
/// `z − 0.5`).
fn day_number_to_calendar(z: f64) -> (i32, u32, u32) {
    let a = if z < GREGORIAN_START_DAY {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day as u32)
}

/// Whole Julian day number and milliseconds elapsed since the preceding midnight.
fn split_jd(jde: JDE) -> (f64, f64) {
    let total_ms = ((jde + 0.5) * MILLISECONDS_PER_DAY).round();
    let z = (total_ms / MILLISECONDS_PER_DAY).floor();
    let ms_of_day = total_ms - z * MILLISECONDS_PER_DAY;
    (z, ms_of_day)
}

/// A calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// An instant, held both as calendar fields (millisecond resolution) and as a Julian Ephemeris Day.
///
/// `Moment` is immutable. Equality and ordering compare the JDE only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Moment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    jde: JDE,
}

impl Moment {
    /// Build a moment from calendar fields.
    ///
    /// The date is read in the Julian calendar up to 1582-10-04 and in the Gregorian calendar from
    /// 1582-10-15 on.
    ///
    /// Arguments
    /// ---------
    /// * `year`: astronomical year numbering (1 BC = 0, 2 BC = −1, ...).
    /// * `month`: 1..=12
    /// * `day`: 1..=31, and valid for the month.
    /// * `hour`, `minute`, `second`, `millisecond`: time of day.
    ///
    /// Returns
    /// --------
    /// * The moment, or [`AstroError::InvalidCalendarDate`] when a field is out of range or the
    ///   date does not exist (February 30, 1582-10-10, ...).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, AstroError> {
        if !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || hour > 23
            || minute > 59
            || second > 59
            || millisecond > 999
        {
            return Err(AstroError::InvalidCalendarDate(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            )));
        }

        let ms_of_day =
            ((hour * 60 + minute) * 60 + second) as f64 * 1000.0 + millisecond as f64;
        let jde = calendar_to_jd(year, month, day as f64 + ms_of_day / MILLISECONDS_PER_DAY);

        let moment = Moment::from_jde(jde)?;
        if (moment.year, moment.month, moment.day) != (year, month, day) {
            return Err(AstroError::InvalidCalendarDate(format!(
                "{year:04}-{month:02}-{day:02} does not exist"
            )));
        }
        Ok(moment)
    }

    /// Midnight (0h) of a calendar date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self, AstroError> {
        Moment::new(year, month, day, 0, 0, 0, 0)
    }

    /// Build a moment from a day of month carrying the time of day as its fraction
    /// (`2000-01-01.5` is J2000.0).
    pub fn from_fractional_day(year: i32, month: u32, day: f64) -> Result<Self, AstroError> {
        ensure_finite("fractional day", day)?;
        if day < 1.0 || day >= 32.0 {
            return Err(AstroError::InvalidCalendarDate(format!(
                "{year:04}-{month:02}-{day}"
            )));
        }
        let midnight = Moment::from_date(year, month, day.floor() as u32)?;
        Moment::from_jde(midnight.jde + day.fract())
    }

    /// Build a moment from a Julian Ephemeris Day; the calendar fields are rounded to the
    /// millisecond while the JDE is kept as given.
    pub fn from_jde(jde: JDE) -> Result<Self, AstroError> {
        ensure_finite("jde", jde)?;

        let (z, ms_of_day) = split_jd(jde);
        let (year, month, day) = day_number_to_calendar(z);

        let ms = ms_of_day as u32;
        Ok(Moment {
            year,
            month,
            day,
            hour: ms / 3_600_000,
            minute: ms / 60_000 % 60,
            second: ms / 1000 % 60,
            millisecond: ms % 1000,
            jde,
        })
    }

    pub fn from_mjd(mjd: MJD) -> Result<Self, AstroError> {
        Moment::from_jde(mjd + JDTOMJD)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    pub fn jde(&self) -> JDE {
        self.jde
    }

    pub fn mjd(&self) -> MJD {
        self.jde - JDTOMJD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn t(&self) -> f64 {
        (self.jde - J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Days elapsed since J2000.0.
    pub fn day_number(&self) -> f64 {
        self.jde - J2000
    }

    /// Fraction of the day elapsed since 0h, in `[0, 1)`.
    pub fn day_fraction(&self) -> f64 {
        let ms = ((self.hour * 60 + self.minute) * 60 + self.second) * 1000 + self.millisecond;
        ms as f64 / MILLISECONDS_PER_DAY
    }

    /// The year plus the elapsed fraction of it (2044-01-01 0h is 2044.0).
    pub fn decimal_year(&self) -> f64 {
        let start = calendar_to_jd(self.year, 1, 1.0);
        let next = calendar_to_jd(self.year + 1, 1, 1.0);
        self.year as f64 + (self.jde - start) / (next - start)
    }

    pub fn add_days(&self, days: f64) -> Result<Self, AstroError> {
        Moment::from_jde(self.jde + ensure_finite("days", days)?)
    }

    pub fn add_seconds(&self, seconds: f64) -> Result<Self, AstroError> {
        Moment::from_jde(self.jde + ensure_finite("seconds", seconds)? / SECONDS_PER_DAY)
    }

    /// This moment as a `hifitime` epoch, reading the JDE in the UTC time scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.jde)
    }

    /// Build a moment from a `hifitime` epoch through its UTC Julian Day.
    pub fn from_epoch(epoch: Epoch) -> Result<Self, AstroError> {
        Moment::from_jde(epoch.to_jde_utc_days())
    }
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.jde == other.jde
    }
}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.jde.partial_cmp(&other.jde)
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}.{:03}",
            self.date(),
            self.hour,
            self.minute,
            self.second,
            self.millisecond
        )
    }
}
