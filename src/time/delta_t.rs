//! ΔT = TT − UT, the offset between dynamical time and universal time.
//!
//! The engine never computes ΔT itself; it asks a [`DeltaT`] collaborator for the offset of a given
//! year. [`EspenakMeeus`] provides the polynomial expressions published by Espenak & Meeus for the
//! NASA *Five Millennium Canon of Solar Eclipses*, and any `Fn(f64) -> f64` can be used instead
//! (a fixed offset, an interpolated table, ...).

use crate::astro_errors::AstroError;
use crate::constants::{horner, SECONDS_PER_DAY};

use super::Moment;

/// Source of ΔT values, in seconds, for a (decimal) year.
pub trait DeltaT {
    fn seconds(&self, year: f64) -> f64;
}

impl<F> DeltaT for F
where
    F: Fn(f64) -> f64,
{
    fn seconds(&self, year: f64) -> f64 {
        self(year)
    }
}

/// Espenak & Meeus (2006) piecewise polynomial ΔT, valid from −1999 to +3000 and extrapolated with
/// the long-term parabola outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EspenakMeeus;

impl DeltaT for EspenakMeeus {
    fn seconds(&self, year: f64) -> f64 {
        let y = year;
        let long_term = |y: f64| {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        };

        if y < -500.0 {
            long_term(y)
        } else if y < 500.0 {
            let u = y / 100.0;
            horner(
                &[
                    10583.6,
                    -1014.41,
                    33.78311,
                    -5.952053,
                    -0.1798452,
                    0.022174192,
                    0.0090316521,
                ],
                u,
            )
        } else if y < 1600.0 {
            let u = (y - 1000.0) / 100.0;
            horner(
                &[
                    1574.2,
                    -556.01,
                    71.23472,
                    0.319781,
                    -0.8503463,
                    -0.005050998,
                    0.0083572073,
                ],
                u,
            )
        } else if y < 1700.0 {
            let t = y - 1600.0;
            horner(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], t)
        } else if y < 1800.0 {
            let t = y - 1700.0;
            horner(
                &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
                t,
            )
        } else if y < 1860.0 {
            let t = y - 1800.0;
            horner(
                &[
                    13.72,
                    -0.332447,
                    0.0068612,
                    0.0041116,
                    -0.00037436,
                    0.0000121272,
                    -0.0000001699,
                    0.000000000875,
                ],
                t,
            )
        } else if y < 1900.0 {
            let t = y - 1860.0;
            horner(
                &[
                    7.62,
                    0.5737,
                    -0.251754,
                    0.01680668,
                    -0.0004473624,
                    1.0 / 233_174.0,
                ],
                t,
            )
        } else if y < 1920.0 {
            let t = y - 1900.0;
            horner(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], t)
        } else if y < 1941.0 {
            let t = y - 1920.0;
            horner(&[21.20, 0.84493, -0.076100, 0.0020936], t)
        } else if y < 1961.0 {
            let t = y - 1950.0;
            horner(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], t)
        } else if y < 1986.0 {
            let t = y - 1975.0;
            horner(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], t)
        } else if y < 2005.0 {
            let t = y - 2000.0;
            horner(
                &[
                    63.86,
                    0.3345,
                    -0.060374,
                    0.0017275,
                    0.000651814,
                    0.00002373599,
                ],
                t,
            )
        } else if y < 2050.0 {
            let t = y - 2000.0;
            horner(&[62.92, 0.32217, 0.005589], t)
        } else if y < 2150.0 {
            long_term(y) - 0.5628 * (2150.0 - y)
        } else {
            long_term(y)
        }
    }
}

impl Moment {
    /// Checked ΔT for the calendar year of this moment.
    fn delta_t_days<D: DeltaT + ?Sized>(&self, delta_t: &D) -> Result<f64, AstroError> {
        let year = self.year() as f64;
        let seconds = delta_t.seconds(year);
        if !seconds.is_finite() {
            return Err(AstroError::NonFiniteDeltaT(year));
        }
        Ok(seconds / SECONDS_PER_DAY)
    }

    /// Convert a moment expressed in dynamical time (TT) to universal time, subtracting ΔT of its
    /// calendar year.
    pub fn to_universal<D: DeltaT + ?Sized>(&self, delta_t: &D) -> Result<Moment, AstroError> {
        Moment::from_jde(self.jde() - self.delta_t_days(delta_t)?)
    }

    /// Convert a moment expressed in universal time to dynamical time (TT), adding ΔT of its
    /// calendar year.
    pub fn to_dynamical<D: DeltaT + ?Sized>(&self, delta_t: &D) -> Result<Moment, AstroError> {
        Moment::from_jde(self.jde() + self.delta_t_days(delta_t)?)
    }
}

#[cfg(test)]
mod delta_t_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_espenak_meeus_values() {
        let dt = EspenakMeeus;
        assert_relative_eq!(dt.seconds(2044.0), 87.915784, epsilon = 1e-6);
        assert_relative_eq!(dt.seconds(2009.0), 66.272239, epsilon = 1e-6);
        assert_relative_eq!(dt.seconds(1993.0), 59.1337, epsilon = 1e-3);
        assert_relative_eq!(dt.seconds(1785.0), 17.0579, epsilon = 1e-3);
        assert_relative_eq!(dt.seconds(2000.0), 63.86, epsilon = 1e-12);
        // long-term parabola far in the past
        assert_relative_eq!(dt.seconds(-1000.0), -20.0 + 32.0 * 28.2 * 28.2, epsilon = 1e-9);
    }

    #[test]
    fn test_closure_provider() {
        let fixed = |_: f64| 69.0;
        assert_eq!(fixed.seconds(2024.0), 69.0);
    }

    #[test]
    fn test_universal_dynamical_conversion() {
        let tt = Moment::from_date(2009, 7, 22).unwrap();
        let ut = tt.to_universal(&EspenakMeeus).unwrap();
        assert_relative_eq!(
            (tt.jde() - ut.jde()) * SECONDS_PER_DAY,
            66.272239,
            epsilon = 1e-4
        );
        let back = ut.to_dynamical(&EspenakMeeus).unwrap();
        assert_relative_eq!(back.jde(), tt.jde(), epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_delta_t() {
        let broken = |_: f64| f64::NAN;
        let m = Moment::from_date(2024, 1, 1).unwrap();
        assert_eq!(
            m.to_universal(&broken),
            Err(AstroError::NonFiniteDeltaT(2024.0))
        );
    }
}
