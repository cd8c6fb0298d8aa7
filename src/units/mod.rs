//! # Angle and distance units
//!
//! Strongly typed, immutable unit wrappers used across the crate:
//!
//! - [`Degrees`] and [`Radians`] – decimal angles,
//! - [`SexagesimalAngle`] – signed degrees / arcminutes / arcseconds,
//! - [`RightAscension`] – hours / minutes / seconds of time (1ʰ = 15°),
//! - [`AstronomicalUnits`] – distances in AU.
//!
//! Every conversion is an explicit, named method (`to_radians`, `to_degrees`, ...). Nothing coerces
//! silently to `f64`; the raw number is only reachable through `value()`.
//!
//! Reduction into the canonical range ([0°, 360°) or [0, 2π)) is never implicit either: call
//! [`Degrees::reduce`] or [`Radians::reduce`] where the algorithm needs it.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{ArcSec, DPI};

mod distance;
mod right_ascension;
mod sexagesimal;

pub use distance::AstronomicalUnits;
pub use right_ascension::RightAscension;
pub use sexagesimal::SexagesimalAngle;

/// Reduce `value` into `[0, period)`.
///
/// `rem_euclid` can round up to `period` itself for tiny negative inputs; that case folds back to 0
/// so the result always lies strictly below `period`.
fn reduce_into(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

macro_rules! impl_angle_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }

        impl AddAssign for $t {
            fn add_assign(&mut self, rhs: $t) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $t {
            fn sub_assign(&mut self, rhs: $t) {
                self.0 -= rhs.0;
            }
        }

        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                $t(-self.0)
            }
        }

        impl Mul<f64> for $t {
            type Output = $t;
            fn mul(self, rhs: f64) -> $t {
                $t(self.0 * rhs)
            }
        }

        impl Div<f64> for $t {
            type Output = $t;
            fn div(self, rhs: f64) -> $t {
                $t(self.0 / rhs)
            }
        }
    };
}

/// An angle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Build an angle from arcseconds.
    pub fn from_arcseconds(arcsec: ArcSec) -> Self {
        Degrees(arcsec / 3600.0)
    }

    /// Build an angle from decimal hours (1ʰ = 15°).
    pub fn from_hours(hours: f64) -> Self {
        Degrees(hours * 15.0)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// The same angle in the range `[0°, 360°)`.
    pub fn reduce(self) -> Self {
        Degrees(reduce_into(self.0, 360.0))
    }

    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    pub fn to_arcseconds(self) -> ArcSec {
        self.0 * 3600.0
    }

    /// Decimal hours (15° = 1ʰ).
    pub fn to_hours(self) -> f64 {
        self.0 / 15.0
    }

    pub fn to_sexagesimal(self) -> Result<SexagesimalAngle, AstroError> {
        SexagesimalAngle::from_degrees(self)
    }

    /// Right ascension of this angle, after reduction into `[0°, 360°)`.
    pub fn to_right_ascension(self) -> Result<RightAscension, AstroError> {
        RightAscension::from_degrees(self)
    }

    pub fn sin(self) -> f64 {
        self.0.to_radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.0.to_radians().cos()
    }

    pub fn tan(self) -> f64 {
        self.0.to_radians().tan()
    }

    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl_angle_ops!(Degrees);

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.0),
            None => write!(f, "{}°", self.0),
        }
    }
}

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(f64);

impl Radians {
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// The same angle in the range `[0, 2π)`.
    pub fn reduce(self) -> Self {
        Radians(reduce_into(self.0, DPI))
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl_angle_ops!(Radians);

impl std::fmt::Display for Radians {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} rad", p, self.0),
            None => write!(f, "{} rad", self.0),
        }
    }
}

#[cfg(test)]
mod units_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reduce_degrees() {
        assert_eq!(Degrees::new(370.0).reduce(), Degrees::new(10.0));
        assert_eq!(Degrees::new(-30.0).reduce(), Degrees::new(330.0));
        assert_eq!(Degrees::new(360.0).reduce(), Degrees::new(0.0));
        assert_eq!(Degrees::new(-720.0).reduce(), Degrees::new(0.0));
        assert_relative_eq!(
            Degrees::new(98123.494701).reduce().value(),
            203.494701,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_reduce_tiny_negative() {
        let r = Degrees::new(-1e-20).reduce();
        assert!(r.value() >= 0.0 && r.value() < 360.0);
        let r = Radians::new(-1e-20).reduce();
        assert!(r.value() >= 0.0 && r.value() < DPI);
    }

    #[test]
    fn test_reduce_is_idempotent() {
        for x in [-1234.5, -360.0, -0.1, 0.0, 45.0, 359.999, 360.0, 7201.3] {
            let once = Degrees::new(x).reduce();
            assert_eq!(once.reduce(), once);
            let once = Radians::new(x).reduce();
            assert_eq!(once.reduce(), once);
        }
    }

    #[test]
    fn test_degrees_radians() {
        assert_relative_eq!(
            Degrees::new(180.0).to_radians().value(),
            std::f64::consts::PI
        );
        assert_relative_eq!(
            Radians::new(0.825715).to_degrees().value(),
            47.309985,
            epsilon = 1e-6
        );
        assert_relative_eq!(Degrees::new(30.0).sin(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_hours_and_arcseconds() {
        assert_eq!(Degrees::from_hours(2.0), Degrees::new(30.0));
        assert_eq!(Degrees::new(45.0).to_hours(), 3.0);
        assert_eq!(Degrees::from_arcseconds(3600.0), Degrees::new(1.0));
        assert_eq!(Degrees::new(0.5).to_arcseconds(), 1800.0);
    }

    #[test]
    fn test_operators() {
        let a = Degrees::new(10.0);
        let b = Degrees::new(2.5);
        assert_eq!(a + b, Degrees::new(12.5));
        assert_eq!(a - b, Degrees::new(7.5));
        assert_eq!(-a, Degrees::new(-10.0));
        assert_eq!(a * 2.0, Degrees::new(20.0));
        assert_eq!(a / 4.0, Degrees::new(2.5));
        let mut c = a;
        c += b;
        c -= Degrees::new(0.5);
        assert_eq!(c, Degrees::new(12.0));
    }
}
