//! # Earth orientation: nutation and obliquity
//!
//! Nutation of the Earth's axis in longitude (Δψ) and in obliquity (Δε) from the IAU 1980 theory,
//! and the obliquity of the ecliptic.
//!
//! ## Overview
//!
//! - [`nutn80`] sums the 106 periodic terms of the IAU 1980 series over five fundamental arguments,
//!   in this order: mean anomaly of the Sun, mean anomaly of the Moon, argument of latitude of the
//!   Moon, mean elongation of the Moon from the Sun, longitude of the Moon's ascending node.
//! - [`mean_obliquity`] is Laskar's 10th-degree polynomial in `U = T / 100`, valid over ±10 000
//!   years around J2000.0.
//! - [`Nutation`] bundles Δψ, Δε, the mean obliquity ε₀ and the true obliquity ε = ε₀ + Δε for a
//!   moment, together with the equation of the equinoxes used by apparent sidereal time.
//!
//! All functions are pure; the coefficient table is a process-wide constant.
//!
//! ## Example
//!
//! ```rust
//! use astrolabe::earth_orientation::Nutation;
//! use astrolabe::time::Moment;
//!
//! let nutation = Nutation::new(&Moment::from_date(1987, 4, 10).unwrap());
//! assert!(nutation.delta_psi < 0.0);
//! assert!(nutation.delta_epsilon > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{horner, ArcSec, Radian, DPI, RADSEC};
use crate::time::Moment;
use crate::units::Degrees;

/// IAU 1980 nutation series.
///
/// Each row holds the multipliers of (M, M′, F, D, Ω) and the coefficients
/// (Δψ sine amplitude, its rate per century, Δε cosine amplitude, its rate per century), in units
/// of 0.1 mas.
#[rustfmt::skip]
const NUTATION_TERMS: [([i8; 5], [f64; 4]); 106] = [
    ([0, 0, 0, 0, 1], [-171996.0, -174.2, 92025.0, 8.9]),
    ([0, 0, 0, 0, 2], [2062.0, 0.2, -895.0, 0.5]),
    ([-2, 0, 2, 0, 1], [46.0, 0.0, -24.0, 0.0]),
    ([2, 0, -2, 0, 0], [11.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 2, 0, 2], [-3.0, 0.0, 1.0, 0.0]),
    ([1, -1, 0, -1, 0], [-3.0, 0.0, 0.0, 0.0]),
    ([0, -2, 2, -2, 1], [-2.0, 0.0, 1.0, 0.0]),
    ([2, 0, -2, 0, 1], [1.0, 0.0, 0.0, 0.0]),
    ([0, 0, 2, -2, 2], [-13187.0, -1.6, 5736.0, -3.1]),
    ([0, 1, 0, 0, 0], [1426.0, -3.4, 54.0, -0.1]),
    ([0, 1, 2, -2, 2], [-517.0, 1.2, 224.0, -0.6]),
    ([0, -1, 2, -2, 2], [217.0, -0.5, -95.0, 0.3]),
    ([0, 0, 2, -2, 1], [129.0, 0.1, -70.0, 0.0]),
    ([2, 0, 0, -2, 0], [48.0, 0.0, 1.0, 0.0]),
    ([0, 0, 2, -2, 0], [-22.0, 0.0, 0.0, 0.0]),
    ([0, 2, 0, 0, 0], [17.0, -0.1, 0.0, 0.0]),
    ([0, 1, 0, 0, 1], [-15.0, 0.0, 9.0, 0.0]),
    ([0, 2, 2, -2, 2], [-16.0, 0.1, 7.0, 0.0]),
    ([0, -1, 0, 0, 1], [-12.0, 0.0, 6.0, 0.0]),
    ([-2, 0, 0, 2, 1], [-6.0, 0.0, 3.0, 0.0]),
    ([0, -1, 2, -2, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([2, 0, 0, -2, 1], [4.0, 0.0, -2.0, 0.0]),
    ([0, 1, 2, -2, 1], [4.0, 0.0, -2.0, 0.0]),
    ([1, 0, 0, -1, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([2, 1, 0, -2, 0], [1.0, 0.0, 0.0, 0.0]),
    ([0, 0, -2, 2, 1], [1.0, 0.0, 0.0, 0.0]),
    ([0, 1, -2, 2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 1, 0, 0, 2], [1.0, 0.0, 0.0, 0.0]),
    ([-1, 0, 0, 1, 1], [1.0, 0.0, 0.0, 0.0]),
    ([0, 1, 2, -2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 0, 2, 0, 2], [-2274.0, -0.2, 977.0, -0.5]),
    ([1, 0, 0, 0, 0], [712.0, 0.1, -7.0, 0.0]),
    ([0, 0, 2, 0, 1], [-386.0, -0.4, 200.0, 0.0]),
    ([1, 0, 2, 0, 2], [-301.0, 0.0, 129.0, -0.1]),
    ([1, 0, 0, -2, 0], [-158.0, 0.0, -1.0, 0.0]),
    ([-1, 0, 2, 0, 2], [123.0, 0.0, -53.0, 0.0]),
    ([0, 0, 0, 2, 0], [63.0, 0.0, -2.0, 0.0]),
    ([1, 0, 0, 0, 1], [63.0, 0.1, -33.0, 0.0]),
    ([-1, 0, 0, 0, 1], [-58.0, -0.1, 32.0, 0.0]),
    ([-1, 0, 2, 2, 2], [-59.0, 0.0, 26.0, 0.0]),
    ([1, 0, 2, 0, 1], [-51.0, 0.0, 27.0, 0.0]),
    ([0, 0, 2, 2, 2], [-38.0, 0.0, 16.0, 0.0]),
    ([2, 0, 0, 0, 0], [29.0, 0.0, -1.0, 0.0]),
    ([1, 0, 2, -2, 2], [29.0, 0.0, -12.0, 0.0]),
    ([2, 0, 2, 0, 2], [-31.0, 0.0, 13.0, 0.0]),
    ([0, 0, 2, 0, 0], [26.0, 0.0, -1.0, 0.0]),
    ([-1, 0, 2, 0, 1], [21.0, 0.0, -10.0, 0.0]),
    ([-1, 0, 0, 2, 1], [16.0, 0.0, -8.0, 0.0]),
    ([1, 0, 0, -2, 1], [-13.0, 0.0, 7.0, 0.0]),
    ([-1, 0, 2, 2, 1], [-10.0, 0.0, 5.0, 0.0]),
    ([1, 1, 0, -2, 0], [-7.0, 0.0, 0.0, 0.0]),
    ([0, 1, 2, 0, 2], [7.0, 0.0, -3.0, 0.0]),
    ([0, -1, 2, 0, 2], [-7.0, 0.0, 3.0, 0.0]),
    ([1, 0, 2, 2, 2], [-8.0, 0.0, 3.0, 0.0]),
    ([1, 0, 0, 2, 0], [6.0, 0.0, 0.0, 0.0]),
    ([2, 0, 2, -2, 2], [6.0, 0.0, -3.0, 0.0]),
    ([0, 0, 0, 2, 1], [-6.0, 0.0, 3.0, 0.0]),
    ([0, 0, 2, 2, 1], [-7.0, 0.0, 3.0, 0.0]),
    ([1, 0, 2, -2, 1], [6.0, 0.0, -3.0, 0.0]),
    ([0, 0, 0, -2, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([1, -1, 0, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    ([2, 0, 2, 0, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([0, 1, 0, -2, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([1, 0, -2, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    ([0, 0, 0, 1, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([1, 1, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    ([1, 0, 2, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    ([1, -1, 2, 0, 2], [-3.0, 0.0, 1.0, 0.0]),
    ([-1, -1, 2, 2, 2], [-3.0, 0.0, 1.0, 0.0]),
    ([-2, 0, 0, 0, 1], [-2.0, 0.0, 1.0, 0.0]),
    ([3, 0, 2, 0, 2], [-3.0, 0.0, 1.0, 0.0]),
    ([0, -1, 2, 2, 2], [-3.0, 0.0, 1.0, 0.0]),
    ([1, 1, 2, 0, 2], [2.0, 0.0, -1.0, 0.0]),
    ([-1, 0, 2, -2, 1], [-2.0, 0.0, 1.0, 0.0]),
    ([2, 0, 0, 0, 1], [2.0, 0.0, -1.0, 0.0]),
    ([1, 0, 0, 0, 2], [-2.0, 0.0, 1.0, 0.0]),
    ([3, 0, 0, 0, 0], [2.0, 0.0, 0.0, 0.0]),
    ([0, 0, 2, 1, 2], [2.0, 0.0, -1.0, 0.0]),
    ([-1, 0, 0, 0, 2], [1.0, 0.0, -1.0, 0.0]),
    ([1, 0, 0, -4, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 2, 2, 2], [1.0, 0.0, -1.0, 0.0]),
    ([-1, 0, 2, 4, 2], [-2.0, 0.0, 1.0, 0.0]),
    ([2, 0, 0, -4, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([1, 1, 2, -2, 2], [1.0, 0.0, -1.0, 0.0]),
    ([1, 0, 2, 2, 1], [-1.0, 0.0, 1.0, 0.0]),
    ([-2, 0, 2, 4, 2], [-1.0, 0.0, 1.0, 0.0]),
    ([-1, 0, 4, 0, 2], [1.0, 0.0, 0.0, 0.0]),
    ([1, -1, 0, -2, 0], [1.0, 0.0, 0.0, 0.0]),
    ([2, 0, 2, -2, 1], [1.0, 0.0, -1.0, 0.0]),
    ([2, 0, 2, 2, 2], [-1.0, 0.0, 0.0, 0.0]),
    ([1, 0, 0, 2, 1], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 0, 4, -2, 2], [1.0, 0.0, 0.0, 0.0]),
    ([3, 0, 2, -2, 2], [1.0, 0.0, 0.0, 0.0]),
    ([1, 0, 2, -2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 1, 2, 0, 1], [1.0, 0.0, 0.0, 0.0]),
    ([-1, -1, 0, 2, 1], [1.0, 0.0, 0.0, 0.0]),
    ([0, 0, -2, 0, 1], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 0, 2, -1, 2], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 1, 0, 2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([1, 0, -2, -2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([0, -1, 2, 0, 1], [-1.0, 0.0, 0.0, 0.0]),
    ([1, 1, 0, -2, 1], [-1.0, 0.0, 0.0, 0.0]),
    ([1, 0, -2, 2, 0], [-1.0, 0.0, 0.0, 0.0]),
    ([2, 0, 0, 2, 0], [1.0, 0.0, 0.0, 0.0]),
    ([0, 0, 2, 4, 2], [-1.0, 0.0, 0.0, 0.0]),
    ([0, 1, 0, 1, 0], [1.0, 0.0, 0.0, 0.0]),
];

/// Units of the series coefficients (0.1 mas) to arcseconds.
const TERM_UNIT: f64 = 1e-4;

/// Fundamental arguments (M, M′, F, D, Ω) in radians, for T Julian centuries from J2000.0.
///
/// M is the mean anomaly of the Sun and M′ the mean anomaly of the Moon.
fn fundamental_arguments(t: f64) -> [Radian; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let sun = (1287099.804 + 129596581.224 * t - 0.577 * t2 - 0.012 * t3) * RADSEC;
    let moon = (485866.733 + 1717915922.633 * t + 31.310 * t2 + 0.064 * t3) * RADSEC;
    let f = (335778.877 + 1739527263.137 * t - 13.257 * t2 + 0.011 * t3) * RADSEC;
    let d = (1072261.307 + 1602961601.328 * t - 6.891 * t2 + 0.019 * t3) * RADSEC;
    let node = (450160.280 - 6962890.539 * t + 7.455 * t2 + 0.008 * t3) * RADSEC;

    [sun % DPI, moon % DPI, f % DPI, d % DPI, node % DPI]
}

/// Nutation in longitude and in obliquity (IAU 1980).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries from J2000.0 (dynamical time).
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in arcseconds.
///
/// # See also
/// * [`Nutation::new`] – the same angles bundled with the obliquity of the date.
pub fn nutn80(t: f64) -> (ArcSec, ArcSec) {
    let args = fundamental_arguments(t);

    let (dpsi, deps) = NUTATION_TERMS
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), (multipliers, coeffs)| {
            let arg: f64 = multipliers
                .iter()
                .zip(args.iter())
                .map(|(&n, &a)| n as f64 * a)
                .sum();
            (
                dpsi + (coeffs[0] + coeffs[1] * t) * arg.sin(),
                deps + (coeffs[2] + coeffs[3] * t) * arg.cos(),
            )
        });

    (dpsi * TERM_UNIT, deps * TERM_UNIT)
}

/// Mean obliquity of the ecliptic ε₀ (Laskar 1986).
///
/// `ε₀ = 23°26′21.448″ − 4680.93″ U − 1.55″ U² + 1999.25″ U³ − …` with `U = T / 100`.
pub fn mean_obliquity(t: f64) -> Degrees {
    const COEFFS: [f64; 11] = [
        84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
    ];
    let u = t / 100.0;
    Degrees::from_arcseconds(horner(&COEFFS, u))
}

/// Nutation angles and obliquity of the ecliptic at a moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    /// Nutation in longitude Δψ, arcseconds.
    pub delta_psi: ArcSec,
    /// Nutation in obliquity Δε, arcseconds.
    pub delta_epsilon: ArcSec,
    pub mean_obliquity: Degrees,
    /// ε = ε₀ + Δε
    pub true_obliquity: Degrees,
}

impl Nutation {
    /// Evaluate the nutation for a moment in dynamical time.
    pub fn new(moment: &Moment) -> Self {
        Nutation::from_centuries(moment.t())
    }

    pub(crate) fn from_centuries(t: f64) -> Self {
        let (delta_psi, delta_epsilon) = nutn80(t);
        let mean_obliquity = mean_obliquity(t);
        Nutation {
            delta_psi,
            delta_epsilon,
            mean_obliquity,
            true_obliquity: mean_obliquity + Degrees::from_arcseconds(delta_epsilon),
        }
    }

    /// Nutation in longitude as an angle.
    pub fn longitude_correction(&self) -> Degrees {
        Degrees::from_arcseconds(self.delta_psi)
    }

    /// Equation of the equinoxes, GAST − GMST.
    ///
    /// `Δψ·cos ε / 15` gives seconds of time; the value is returned converted to degrees.
    pub fn equation_of_equinoxes(&self) -> Degrees {
        let seconds_of_time = self.delta_psi * self.true_obliquity.cos() / 15.0;
        Degrees::from_hours(seconds_of_time / 3600.0)
    }
}
