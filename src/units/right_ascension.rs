use serde::{Deserialize, Serialize};

use crate::astro_errors::{ensure_finite, AstroError};

use super::{Degrees, Radians};

/// Right ascension in hours, minutes and seconds of time.
///
/// One hour of right ascension is 15°, so the full circle spans `0h..24h`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightAscension {
    hours: u32,
    minutes: u32,
    seconds: f64,
}

impl RightAscension {
    /// Build a right ascension from its components.
    ///
    /// Arguments
    /// ---------
    /// * `hours`: `0..=23`
    /// * `minutes`: `0..=59`
    /// * `seconds`: `[0, 60)`
    ///
    /// Returns
    /// --------
    /// * The right ascension, or [`AstroError::RightAscensionOutOfRange`] when a component falls
    ///   outside its range.
    pub fn new(hours: u32, minutes: u32, seconds: f64) -> Result<Self, AstroError> {
        ensure_finite("right ascension seconds", seconds)?;
        if hours > 23 {
            return Err(AstroError::RightAscensionOutOfRange(format!(
                "hours must lie in 0..=23, got {hours}"
            )));
        }
        if minutes > 59 {
            return Err(AstroError::RightAscensionOutOfRange(format!(
                "minutes must lie in 0..=59, got {minutes}"
            )));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(AstroError::RightAscensionOutOfRange(format!(
                "seconds must lie in [0, 60), got {seconds}"
            )));
        }
        Ok(RightAscension {
            hours,
            minutes,
            seconds,
        })
    }

    /// Right ascension of an arbitrary angle, reduced into `[0°, 360°)` first.
    ///
    /// Seconds are rounded to 8 decimals with carry into minutes and hours; 24ʰ wraps to 0ʰ.
    /// NaN and infinite angles fail with [`AstroError::NonFiniteInput`].
    pub fn from_degrees(angle: Degrees) -> Result<Self, AstroError> {
        ensure_finite("right ascension", angle.value())?;
        let hours_decimal = angle.reduce().to_hours();

        let mut hours = hours_decimal.floor();
        let mut minutes = ((hours_decimal - hours) * 60.0).floor();
        let mut seconds = ((((hours_decimal - hours) * 60.0 - minutes) * 60.0) * 1e8).round() / 1e8;

        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes -= 60.0;
            hours += 1.0;
        }
        if hours >= 24.0 {
            hours -= 24.0;
        }

        Ok(RightAscension {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Decimal hours.
    pub fn to_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    pub fn to_degrees(&self) -> Degrees {
        Degrees::from_hours(self.to_hours())
    }

    pub fn to_radians(&self) -> Radians {
        self.to_degrees().to_radians()
    }
}

impl TryFrom<Degrees> for RightAscension {
    type Error = AstroError;

    fn try_from(angle: Degrees) -> Result<Self, Self::Error> {
        RightAscension::from_degrees(angle)
    }
}

impl std::fmt::Display for RightAscension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod right_ascension_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hms_to_degrees() {
        let ra = RightAscension::new(20, 21, 7.2).unwrap();
        assert_relative_eq!(ra.to_degrees().value(), 305.28, epsilon = 1e-10);

        let ra = RightAscension::new(7, 45, 18.946).unwrap();
        assert_relative_eq!(ra.to_degrees().value(), 116.328942, epsilon = 1e-6);
    }

    #[test]
    fn test_degrees_to_hms() {
        let ra = RightAscension::from_degrees(Degrees::new(305.28)).unwrap();
        assert_eq!(ra.hours(), 20);
        assert_eq!(ra.minutes(), 21);
        assert_relative_eq!(ra.seconds(), 7.2, epsilon = 1e-8);
    }

    #[test]
    fn test_from_degrees_reduces_first() {
        let ra = Degrees::new(-54.72).to_right_ascension().unwrap();
        assert_eq!(ra.hours(), 20);
        assert_eq!(ra.minutes(), 21);
        assert_relative_eq!(ra.seconds(), 7.2, epsilon = 1e-8);

        let ra = RightAscension::try_from(Degrees::new(360.0 - 1e-12)).unwrap();
        assert_eq!(ra.hours(), 0);
        assert_eq!(ra.minutes(), 0);

        assert_eq!(
            RightAscension::from_degrees(Degrees::new(f64::INFINITY)),
            Err(AstroError::NonFiniteInput("right ascension"))
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            RightAscension::new(24, 0, 0.0),
            Err(AstroError::RightAscensionOutOfRange(_))
        ));
        assert!(matches!(
            RightAscension::new(12, 60, 0.0),
            Err(AstroError::RightAscensionOutOfRange(_))
        ));
        assert!(matches!(
            RightAscension::new(12, 0, 60.0),
            Err(AstroError::RightAscensionOutOfRange(_))
        ));
        assert!(matches!(
            RightAscension::new(12, 0, -0.5),
            Err(AstroError::RightAscensionOutOfRange(_))
        ));
    }
}
