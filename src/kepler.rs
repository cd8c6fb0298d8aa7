//! # Kepler equation
//!
//! Solution of Kepler's equation `M = E − e·sin E` for elliptic orbits, and the series giving the
//! true anomaly from the eccentric anomaly.
//!
//! ## Overview
//!
//! - [`solve_kepler_equation`] runs the Newton fixed-point iteration
//!   `Eₙ₊₁ = Eₙ + (M + e·sin Eₙ − Eₙ) / (1 − e·cos Eₙ)` starting from `E₀ = M`, until two successive
//!   estimates differ by at most [`SolverSettings::kepler_tolerance`]. The loop is capped by
//!   [`SolverSettings::kepler_max_iterations`] and fails with
//!   [`AstroError::KeplerNotConverged`] beyond it.
//! - [`true_anomaly`] evaluates the truncated Fourier expansion
//!   `v ≈ E + (e + e³/4)·sin E + (e²/4)·sin 2E + (e³/12)·sin 3E`.
//!
//! For planetary eccentricities (e < 0.25) the iteration converges in two or three steps.

use log::trace;

use crate::astro_errors::{ensure_finite, AstroError};
use crate::settings::SolverSettings;
use crate::units::Radians;

/// Outcome of [`solve_kepler_equation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: Radians,
    /// Number of Newton steps taken.
    pub iterations: usize,
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M, radians (any range).
/// * `eccentricity`: e, must lie in `[0, 1)`.
/// * `settings`: tolerance and iteration cap.
///
/// Returns
/// --------
/// * The eccentric anomaly E (same branch as M) and the iteration count, or
///   - [`AstroError::InvalidEccentricity`] when `e ∉ [0, 1)`,
///   - [`AstroError::NonFiniteInput`] when M is NaN or infinite,
///   - [`AstroError::KeplerNotConverged`] when the cap is reached.
///
/// # See also
/// * [`true_anomaly`] – next step of the anomaly chain.
pub fn solve_kepler_equation(
    mean_anomaly: Radians,
    eccentricity: f64,
    settings: &SolverSettings,
) -> Result<KeplerSolution, AstroError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(AstroError::InvalidEccentricity(eccentricity));
    }
    let m = ensure_finite("mean anomaly", mean_anomaly.value())?;
    let e = eccentricity;

    let mut ecc_anomaly = m;
    for iteration in 1..=settings.kepler_max_iterations {
        let next = ecc_anomaly
            + (m + e * ecc_anomaly.sin() - ecc_anomaly) / (1.0 - e * ecc_anomaly.cos());
        let step = (next - ecc_anomaly).abs();
        trace!("kepler iteration {iteration}: E = {next}, |dE| = {step:e}");

        if step <= settings.kepler_tolerance {
            return Ok(KeplerSolution {
                eccentric_anomaly: Radians::new(next),
                iterations: iteration,
            });
        }
        ecc_anomaly = next;
    }

    Err(AstroError::KeplerNotConverged {
        mean_anomaly: m,
        eccentricity: e,
        iterations: settings.kepler_max_iterations,
    })
}

/// True anomaly from the eccentric anomaly, by the third-order series in e.
pub fn true_anomaly(eccentric_anomaly: Radians, eccentricity: f64) -> Radians {
    let big_e = eccentric_anomaly.value();
    let e = eccentricity;
    let e2 = e * e;
    let e3 = e2 * e;

    Radians::new(
        big_e
            + (e + e3 / 4.0) * big_e.sin()
            + (e2 / 4.0) * (2.0 * big_e).sin()
            + (e3 / 12.0) * (3.0 * big_e).sin(),
    )
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use crate::constants::DPI;
    use crate::units::Degrees;
    use approx::assert_relative_eq;

    #[test]
    fn test_mars_anomalies() {
        // Mars, 2024-04-07 0h TD
        let m = Degrees::new(343.50606866).to_radians();
        let e = 0.09342260;
        let sol = solve_kepler_equation(m, e, &SolverSettings::default()).unwrap();
        assert_eq!(sol.iterations, 2);
        assert_relative_eq!(
            sol.eccentric_anomaly.to_degrees().reduce().value(),
            341.83756,
            epsilon = 1e-5
        );
        let v = true_anomaly(sol.eccentric_anomaly, e);
        assert_relative_eq!(v.to_degrees().reduce().value(), 340.08819, epsilon = 1e-5);
    }

    #[test]
    fn test_earth_anomalies() {
        let e = 0.01670863 - 0.000042037 * 0.24;
        let m = Degrees::new(0.75077102).to_radians();
        let sol = solve_kepler_equation(m, e, &SolverSettings::default()).unwrap();
        assert_relative_eq!(
            sol.eccentric_anomaly.to_degrees().value(),
            0.76352031,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_zero_eccentricity() {
        let m = Radians::new(1.234);
        let sol = solve_kepler_equation(m, 0.0, &SolverSettings::default()).unwrap();
        assert_eq!(sol.eccentric_anomaly, m);
        assert_eq!(sol.iterations, 1);
        assert_eq!(true_anomaly(m, 0.0), m);
    }

    #[test]
    fn test_residual_over_grid() {
        let settings = SolverSettings::default();
        for i in 0..=90 {
            let e = i as f64 / 100.0;
            for j in 0..360 {
                let m = j as f64 * DPI / 360.0;
                let sol = solve_kepler_equation(Radians::new(m), e, &settings).unwrap();
                let big_e = sol.eccentric_anomaly.value();
                assert!(
                    (big_e - e * big_e.sin() - m).abs() <= 1e-4,
                    "e = {e}, M = {m}"
                );
                assert!(sol.iterations <= 10);
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let s = SolverSettings::default();
        assert_eq!(
            solve_kepler_equation(Radians::new(1.0), 1.0, &s),
            Err(AstroError::InvalidEccentricity(1.0))
        );
        assert_eq!(
            solve_kepler_equation(Radians::new(1.0), -0.1, &s),
            Err(AstroError::InvalidEccentricity(-0.1))
        );
        assert!(solve_kepler_equation(Radians::new(1.0), f64::NAN, &s).is_err());
        assert_eq!(
            solve_kepler_equation(Radians::new(f64::INFINITY), 0.1, &s),
            Err(AstroError::NonFiniteInput("mean anomaly"))
        );
    }

    #[test]
    fn test_iteration_cap() {
        let settings = SolverSettings::builder()
            .kepler_max_iterations(1)
            .build()
            .unwrap();
        let m = Degrees::new(343.50606866).to_radians();
        let err = solve_kepler_equation(m, 0.09342260, &settings).unwrap_err();
        assert!(matches!(
            err,
            AstroError::KeplerNotConverged { iterations: 1, .. }
        ));
    }
}
