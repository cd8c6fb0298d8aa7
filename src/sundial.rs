//! Hour lines of a horizontal sundial.
//!
//! For a dial at latitude φ with a gnomon parallel to the Earth's axis, the line of local apparent
//! solar hour t makes an angle `H = atan(sin φ · tan((t − 12) · 15°))` with the noon line.
//! Afternoon lines lie to the east of the noon line (positive angles), morning lines mirror them.

use serde::{Deserialize, Serialize};

use crate::astro_errors::{ensure_finite, AstroError};
use crate::units::{Degrees, Radians};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourLine {
    /// Local apparent solar hour, 6..=18.
    pub hour: u32,
    /// Angle from the noon line.
    pub angle: Degrees,
}

/// Hour lines from 6h to 18h for a sundial at `latitude`.
///
/// Returns [`AstroError::InvalidLatitude`] outside [−90°, 90°].
pub fn hour_lines(latitude: Degrees) -> Result<Vec<HourLine>, AstroError> {
    let phi = ensure_finite("sundial latitude", latitude.value())?;
    if phi.abs() > 90.0 {
        return Err(AstroError::InvalidLatitude(phi));
    }

    let afternoon = |hour: u32| {
        let h = Degrees::new((hour as f64 - 12.0) * 15.0);
        Radians::new((latitude.sin() * h.tan()).atan()).to_degrees()
    };

    Ok((6..=18)
        .map(|hour| {
            let angle = match hour {
                12 => Degrees::new(0.0),
                13..=18 => afternoon(hour),
                _ => -afternoon(24 - hour),
            };
            HourLine { hour, angle }
        })
        .collect())
}

#[cfg(test)]
mod sundial_test {
    use super::*;
    use crate::units::SexagesimalAngle;
    use approx::assert_relative_eq;

    fn angles(latitude: Degrees) -> Vec<f64> {
        hour_lines(latitude)
            .unwrap()
            .iter()
            .map(|line| line.angle.value())
            .collect()
    }

    #[test]
    fn test_london() {
        let london = SexagesimalAngle::new(51, 30, 26.0).unwrap().to_degrees();
        let lines = angles(london);
        assert_eq!(lines.len(), 13);

        let expected = [0.0, 11.8444, 24.3175, 38.0498, 53.5856, 71.1016, 90.0];
        for (angle, expected) in lines[6..].iter().zip(expected) {
            assert_relative_eq!(*angle, expected, epsilon = 1e-4);
        }
        for hour in 0..6 {
            assert_eq!(lines[hour], -lines[12 - hour]);
        }
    }

    #[test]
    fn test_corvallis() {
        let corvallis = SexagesimalAngle::new(44, 34, 11.0).unwrap().to_degrees();
        let lines = angles(corvallis);
        let expected = [10.6496, 22.0564, 35.0603, 50.5559, 69.1024];
        for (angle, expected) in lines[7..12].iter().zip(expected) {
            assert_relative_eq!(*angle, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            hour_lines(Degrees::new(95.0)),
            Err(AstroError::InvalidLatitude(95.0))
        );
    }
}
