use serde::{Deserialize, Serialize};

use crate::astro_errors::{ensure_finite, AstroError};

use super::{Degrees, Radians};

/// Number of decimals kept on the seconds field when splitting a decimal angle.
const SECONDS_DECIMALS: i32 = 8;

/// A signed angle in degrees, arcminutes and arcseconds.
///
/// The three fields are unsigned magnitudes; the sign is carried separately so that angles such as
/// `-0° 13′ 49″` keep their sign even though the degree field is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexagesimalAngle {
    negative: bool,
    degrees: u32,
    minutes: u32,
    seconds: f64,
}

impl SexagesimalAngle {
    /// Build an angle from signed components.
    ///
    /// The sign is read from the most significant non-zero component: `(-23, 13, 49)`,
    /// `(0, -13, 49)` and `(0, 0, -49)` are all negative. Components less significant than the one
    /// carrying the sign must be non-negative.
    ///
    /// Arguments
    /// ---------
    /// * `degrees`: integer degrees (any magnitude).
    /// * `minutes`: arcminutes, magnitude in `0..=59`.
    /// * `seconds`: arcseconds, magnitude in `[0, 60)`.
    ///
    /// Returns
    /// --------
    /// * The angle, or [`AstroError::SexagesimalOutOfRange`] / [`AstroError::NonFiniteInput`].
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Result<Self, AstroError> {
        ensure_finite("sexagesimal seconds", seconds)?;

        let negative = if degrees != 0 {
            if minutes < 0 || seconds < 0.0 {
                return Err(AstroError::SexagesimalOutOfRange(format!(
                    "only the leading component may be negative: ({degrees}, {minutes}, {seconds})"
                )));
            }
            degrees < 0
        } else if minutes != 0 {
            if seconds < 0.0 {
                return Err(AstroError::SexagesimalOutOfRange(format!(
                    "only the leading component may be negative: ({degrees}, {minutes}, {seconds})"
                )));
            }
            minutes < 0
        } else {
            seconds < 0.0
        };

        if minutes.unsigned_abs() > 59 {
            return Err(AstroError::SexagesimalOutOfRange(format!(
                "minutes must lie in 0..=59, got {minutes}"
            )));
        }
        if seconds.abs() >= 60.0 {
            return Err(AstroError::SexagesimalOutOfRange(format!(
                "seconds must lie in [0, 60), got {seconds}"
            )));
        }

        Ok(SexagesimalAngle {
            negative,
            degrees: degrees.unsigned_abs(),
            minutes: minutes.unsigned_abs(),
            seconds: seconds.abs(),
        })
    }

    /// Split a decimal angle into degrees, arcminutes and arcseconds.
    ///
    /// Seconds are rounded to 8 decimals; a rounding that reaches 60″ carries into the minutes
    /// (and 60′ into the degrees). NaN and infinite angles fail with
    /// [`AstroError::NonFiniteInput`].
    pub fn from_degrees(angle: Degrees) -> Result<Self, AstroError> {
        let value = ensure_finite("sexagesimal angle", angle.value())?;
        let negative = value < 0.0;
        let magnitude = value.abs();

        let mut degrees = magnitude.floor();
        let mut minutes = ((magnitude - degrees) * 60.0).floor();
        let scale = 10f64.powi(SECONDS_DECIMALS);
        let mut seconds = ((((magnitude - degrees) * 60.0 - minutes) * 60.0) * scale).round() / scale;

        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes -= 60.0;
            degrees += 1.0;
        }

        Ok(SexagesimalAngle {
            negative,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn to_degrees(&self) -> Degrees {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        Degrees::new(if self.negative { -magnitude } else { magnitude })
    }

    pub fn to_radians(&self) -> Radians {
        self.to_degrees().to_radians()
    }
}

impl TryFrom<Degrees> for SexagesimalAngle {
    type Error = AstroError;

    fn try_from(angle: Degrees) -> Result<Self, Self::Error> {
        SexagesimalAngle::from_degrees(angle)
    }
}

impl std::fmt::Display for SexagesimalAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "+" };
        write!(
            f,
            "{sign}{}° {}' {}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod sexagesimal_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decimal_to_dms() {
        let a = SexagesimalAngle::from_degrees(Degrees::new(47.31)).unwrap();
        assert_eq!(a.degrees(), 47);
        assert_eq!(a.minutes(), 18);
        assert_relative_eq!(a.seconds(), 36.0, epsilon = 1e-8);
        assert!(!a.is_negative());

        let a = SexagesimalAngle::from_degrees(Degrees::new(92.789)).unwrap();
        assert_eq!(a.degrees(), 92);
        assert_eq!(a.minutes(), 47);
        assert_relative_eq!(a.seconds(), 20.4, epsilon = 1e-8);
    }

    #[test]
    fn test_negative_decimal_to_dms() {
        let a = SexagesimalAngle::try_from(Degrees::new(-0.5)).unwrap();
        assert!(a.is_negative());
        assert_eq!(a.degrees(), 0);
        assert_eq!(a.minutes(), 30);
        assert_eq!(a.to_degrees(), Degrees::new(-0.5));
    }

    #[test]
    fn test_seconds_carry() {
        // just below 10°, the seconds round up to 60″ and carry
        let a = SexagesimalAngle::from_degrees(Degrees::new(10.0 - 1e-13)).unwrap();
        assert_eq!(a.degrees(), 10);
        assert_eq!(a.minutes(), 0);
        assert_eq!(a.seconds(), 0.0);
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                SexagesimalAngle::from_degrees(Degrees::new(value)),
                Err(AstroError::NonFiniteInput("sexagesimal angle"))
            );
        }
        let err = Degrees::new(f64::NAN).to_sexagesimal().unwrap_err();
        assert_eq!(err.kind(), crate::astro_errors::ErrorKind::Validation);
    }

    #[test]
    fn test_sign_of_leading_term() {
        assert!(SexagesimalAngle::new(-23, 13, 49.0).unwrap().is_negative());
        assert!(SexagesimalAngle::new(0, -13, 49.0).unwrap().is_negative());
        assert!(SexagesimalAngle::new(0, 0, -49.0).unwrap().is_negative());
        assert!(!SexagesimalAngle::new(0, 0, 49.0).unwrap().is_negative());
        assert!(!SexagesimalAngle::new(0, 13, 49.0).unwrap().is_negative());
        assert!(!SexagesimalAngle::new(23, 13, 49.0).unwrap().is_negative());
    }

    #[test]
    fn test_dms_to_decimal() {
        let a = SexagesimalAngle::new(47, 18, 36.0).unwrap();
        assert_relative_eq!(a.to_degrees().value(), 47.31, epsilon = 1e-12);

        let a = SexagesimalAngle::new(92, 47, 20.4).unwrap();
        assert_relative_eq!(a.to_degrees().value(), 92.789, epsilon = 1e-12);

        let a = SexagesimalAngle::new(0, -13, 49.0).unwrap();
        assert_relative_eq!(
            a.to_degrees().value(),
            -(13.0 / 60.0 + 49.0 / 3600.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dms_to_radians() {
        let a = SexagesimalAngle::from_degrees(Degrees::new(47.31)).unwrap();
        assert_relative_eq!(a.to_radians().value(), 0.8257152, epsilon = 1e-6);

        let a = SexagesimalAngle::new(184, 36, 0.0).unwrap();
        assert_relative_eq!(a.to_radians().value(), 3.221878, epsilon = 1e-4);
    }

    #[test]
    fn test_radians_to_dms() {
        let a = Radians::new(0.825715).to_degrees().to_sexagesimal().unwrap();
        assert_eq!(a.degrees(), 47);
        assert_eq!(a.minutes(), 18);
        assert_relative_eq!(a.seconds(), 35.94, epsilon = 1e-2);
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(matches!(
            SexagesimalAngle::new(10, 60, 0.0),
            Err(AstroError::SexagesimalOutOfRange(_))
        ));
        assert!(matches!(
            SexagesimalAngle::new(10, 5, 60.0),
            Err(AstroError::SexagesimalOutOfRange(_))
        ));
        assert!(matches!(
            SexagesimalAngle::new(10, -5, 0.0),
            Err(AstroError::SexagesimalOutOfRange(_))
        ));
        assert!(matches!(
            SexagesimalAngle::new(0, 5, -1.0),
            Err(AstroError::SexagesimalOutOfRange(_))
        ));
        assert_eq!(
            SexagesimalAngle::new(10, 5, f64::NAN),
            Err(AstroError::NonFiniteInput("sexagesimal seconds"))
        );
    }
}
