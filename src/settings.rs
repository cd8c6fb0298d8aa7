//! # Solver settings
//!
//! Tolerances and iteration caps of the two fixed-point loops of the engine:
//!
//! - the Kepler equation solver ([`crate::kepler::solve_kepler_equation`]),
//! - the light-time iteration of [`crate::geocentric::GeocentricPosition`].
//!
//! The settings also select the planetary theory of [`crate::heliocentric`].
//!
//! [`SolverSettings`] is plain data (serde-enabled, every field defaulted) so it can be embedded in
//! a caller's configuration file. Use [`SolverSettings::builder`] for validated construction.
//!
//! ## Example
//!
//! ```rust
//! use astrolabe::settings::SolverSettings;
//!
//! let settings = SolverSettings::builder()
//!     .kepler_tolerance(1e-8)
//!     .light_time_max_iterations(20)
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.kepler_max_iterations, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::heliocentric::HeliocentricTheory;

/// Convergence controls of the iterative solvers.
///
/// Defaults
/// -----------------
/// * `kepler_tolerance`: 1e-4 rad, on successive eccentric anomaly estimates.
/// * `kepler_max_iterations`: 50
/// * `light_time_tolerance`: 1e-7, relative, on successive light-time estimates.
/// * `light_time_max_iterations`: 50
/// * `heliocentric_theory`: [`HeliocentricTheory::Vsop87`]
///
/// Exceeding an iteration cap fails with [`AstroError::KeplerNotConverged`] or
/// [`AstroError::LightTimeNotConverged`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub kepler_tolerance: f64,
    pub kepler_max_iterations: usize,
    pub light_time_tolerance: f64,
    pub light_time_max_iterations: usize,
    pub heliocentric_theory: HeliocentricTheory,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            kepler_tolerance: 1e-4,
            kepler_max_iterations: 50,
            light_time_tolerance: 1e-7,
            light_time_max_iterations: 50,
            heliocentric_theory: HeliocentricTheory::Vsop87,
        }
    }
}

impl SolverSettings {
    pub fn builder() -> SolverSettingsBuilder {
        SolverSettingsBuilder::new()
    }
}

/// Builder for [`SolverSettings`], with validation.
#[derive(Debug, Clone)]
pub struct SolverSettingsBuilder {
    settings: SolverSettings,
}

impl Default for SolverSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverSettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: SolverSettings::default(),
        }
    }

    pub fn kepler_tolerance(mut self, v: f64) -> Self {
        self.settings.kepler_tolerance = v;
        self
    }

    pub fn kepler_max_iterations(mut self, v: usize) -> Self {
        self.settings.kepler_max_iterations = v;
        self
    }

    pub fn light_time_tolerance(mut self, v: f64) -> Self {
        self.settings.light_time_tolerance = v;
        self
    }

    pub fn light_time_max_iterations(mut self, v: usize) -> Self {
        self.settings.light_time_max_iterations = v;
        self
    }

    pub fn heliocentric_theory(mut self, theory: HeliocentricTheory) -> Self {
        self.settings.heliocentric_theory = theory;
        self
    }

    fn positive(x: f64) -> bool {
        x.is_finite() && x > 0.0
    }

    /// Validate and return the settings.
    ///
    /// Tolerances must be finite and strictly positive, iteration caps at least 1.
    pub fn build(self) -> Result<SolverSettings, AstroError> {
        let s = &self.settings;

        if !Self::positive(s.kepler_tolerance) {
            return Err(AstroError::InvalidSolverSetting(
                "kepler_tolerance must be > 0".into(),
            ));
        }
        if !Self::positive(s.light_time_tolerance) {
            return Err(AstroError::InvalidSolverSetting(
                "light_time_tolerance must be > 0".into(),
            ));
        }
        if s.kepler_max_iterations == 0 {
            return Err(AstroError::InvalidSolverSetting(
                "kepler_max_iterations must be >= 1".into(),
            ));
        }
        if s.light_time_max_iterations == 0 {
            return Err(AstroError::InvalidSolverSetting(
                "light_time_max_iterations must be >= 1".into(),
            ));
        }

        Ok(self.settings)
    }
}

#[cfg(test)]
mod settings_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = SolverSettings::default();
        assert_eq!(s.kepler_tolerance, 1e-4);
        assert_eq!(s.kepler_max_iterations, 50);
        assert_eq!(s.light_time_tolerance, 1e-7);
        assert_eq!(s.light_time_max_iterations, 50);
        assert_eq!(s.heliocentric_theory, HeliocentricTheory::Vsop87);
        assert_eq!(SolverSettings::builder().build().unwrap(), s);
    }

    #[test]
    fn test_builder_validation() {
        assert!(SolverSettings::builder()
            .kepler_tolerance(0.0)
            .build()
            .is_err());
        assert!(SolverSettings::builder()
            .light_time_tolerance(f64::NAN)
            .build()
            .is_err());
        assert!(SolverSettings::builder()
            .kepler_max_iterations(0)
            .build()
            .is_err());
        let err = SolverSettings::builder()
            .light_time_max_iterations(0)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid solver setting: light_time_max_iterations must be >= 1"
        );
    }

    #[test]
    fn test_partial_deserialization() {
        let s: SolverSettings = serde_json::from_str(r#"{"kepler_max_iterations": 8}"#).unwrap();
        assert_eq!(s.kepler_max_iterations, 8);
        assert_eq!(s.kepler_tolerance, 1e-4);
        assert_eq!(s.light_time_max_iterations, 50);
        assert_eq!(s.heliocentric_theory, HeliocentricTheory::Vsop87);

        let s: SolverSettings =
            serde_json::from_str(r#"{"heliocentric_theory": "MeanElements"}"#).unwrap();
        assert_eq!(s.heliocentric_theory, HeliocentricTheory::MeanElements);
        assert_eq!(s.kepler_max_iterations, 50);
    }
}
