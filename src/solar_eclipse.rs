//! # Solar eclipses
//!
//! Detection and classification of solar eclipses at the new moons of a date range (Meeus,
//! *Astronomical Algorithms*, chapter 54).
//!
//! ## Overview
//!
//! For every new moon produced by [`crate::moon_phase::new_moons`]:
//!
//! 1. Mean arguments are evaluated at the instant of the new moon: M from the solar theory of
//!    [`crate::sun`], M′, F and Ω from the lunation number (see [`LunationArguments`]).
//! 2. `F′ = F − 0.02665° sin Ω` and `A′ = 299.77° + 0.107408° k − 0.009173° T²`.
//! 3. P and Q (coordinates of the shadow axis, Earth radii) and `W = |cos F′|` give
//!    `γ = (P cos F′ + Q sin F′)(1 − 0.0048 W)`; u is the radius of the umbral cone.
//! 4. An eclipse exists when `|γ| ≤ 1.5433 + u`. It is partial when `|γ| ≥ 0.9972`, otherwise
//!    total when `u < 0`, annular when `u > 0.0047`, and for `0 ≤ u ≤ 0.0047` hybrid if
//!    `u < 0.00464 √(1 − γ²)` else annular.
//! 5. The instant of greatest eclipse is the mean phase plus a 16-term periodic correction,
//!    converted to universal time.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::moon_phase::{new_moons, LunationArguments, MoonPhase, PhaseKind};
use crate::sun;
use crate::time::{CalendarDate, DateRange, DeltaT, Moment};
use crate::units::Degrees;

/// Largest |γ| at which the penumbra still touches the Earth, without the umbral radius u.
const PENUMBRAL_LIMIT: f64 = 1.5433;

/// |γ| above which the umbral cone misses the Earth.
const CENTRAL_LIMIT: f64 = 0.9972;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EclipseKind {
    Partial,
    Total,
    Annular,
    Hybrid,
}

impl std::fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EclipseKind::Partial => "Partial",
            EclipseKind::Total => "Total",
            EclipseKind::Annular => "Annular",
            EclipseKind::Hybrid => "Hybrid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEclipse {
    /// Date of the new moon, universal time.
    pub date: CalendarDate,
    /// Instant of greatest eclipse, universal time.
    pub greatest_eclipse: Moment,
    pub kind: EclipseKind,
    /// Greatest magnitude, only defined for partial eclipses.
    pub magnitude: Option<f64>,
    /// Least distance of the shadow axis from the centre of the Earth, Earth radii.
    pub gamma: f64,
    /// Radius of the Moon's umbral cone in the fundamental plane, Earth radii.
    pub umbral_radius: f64,
    pub lunation: i64,
}

impl SolarEclipse {
    /// Evaluate the shadow geometry at a new moon.
    ///
    /// Arguments
    /// ---------
    /// * `new_moon`: a [`PhaseKind::NewMoon`] phase.
    /// * `delta_t`: TT − UT provider for the instant of greatest eclipse.
    ///
    /// Returns
    /// --------
    /// * `Some(eclipse)` when the shadow reaches the Earth, `None` otherwise, or
    ///   [`AstroError::NotANewMoon`] when given another phase.
    pub fn at_new_moon<D: DeltaT + ?Sized>(
        new_moon: &MoonPhase,
        delta_t: &D,
    ) -> Result<Option<Self>, AstroError> {
        if new_moon.kind != PhaseKind::NewMoon {
            return Err(AstroError::NotANewMoon(new_moon.kind.to_string()));
        }

        let k = new_moon.lunation as f64;
        let t = new_moon.moment.t();
        let args = LunationArguments::new(k, t);
        let e = args.e;

        let m = sun::mean_anomaly(t);
        let mp = args.moon_anomaly;
        let omega = args.ascending_node;
        let f1 = (args.latitude_argument - Degrees::new(0.02665 * omega.sin())).reduce();
        let a1 = Degrees::new(299.77 + 0.107408 * k - 0.009173 * t * t).reduce();

        let p = 0.2070 * e * m.sin() + 0.0024 * e * (m * 2.0).sin() - 0.0392 * mp.sin()
            + 0.0116 * (mp * 2.0).sin()
            - 0.0073 * e * (mp + m).sin()
            + 0.0067 * e * (mp - m).sin()
            + 0.0118 * (f1 * 2.0).sin();
        let q = 5.2207 - 0.0048 * e * m.cos() + 0.0020 * e * (m * 2.0).cos() - 0.3299 * mp.cos()
            - 0.0060 * e * (mp + m).cos()
            + 0.0041 * e * (mp - m).cos();
        let w = f1.cos().abs();

        let gamma = (p * f1.cos() + q * f1.sin()) * (1.0 - 0.0048 * w);
        let u = 0.0059 + 0.0046 * e * m.cos() - 0.0182 * mp.cos() + 0.0004 * (mp * 2.0).cos()
            - 0.0005 * (m + mp).cos();
        trace!("lunation {}: gamma = {gamma}, u = {u}", new_moon.lunation);

        let Some(kind) = classify(gamma, u) else {
            return Ok(None);
        };
        let magnitude = (kind == EclipseKind::Partial)
            .then(|| (PENUMBRAL_LIMIT + u - gamma.abs()) / (0.5461 + 2.0 * u));

        let correction = -0.4075 * mp.sin() + 0.1721 * e * m.sin() + 0.0161 * (mp * 2.0).sin()
            - 0.0097 * (f1 * 2.0).sin()
            + 0.0073 * e * (mp - m).sin()
            - 0.0050 * e * (mp + m).sin()
            - 0.0023 * (mp - f1 * 2.0).sin()
            + 0.0021 * e * (m * 2.0).sin()
            + 0.0012 * (mp + f1 * 2.0).sin()
            + 0.0006 * e * (mp * 2.0 + m).sin()
            - 0.0004 * (mp * 3.0).sin()
            - 0.0003 * e * (m + f1 * 2.0).sin()
            + 0.0003 * a1.sin()
            - 0.0002 * e * (m - f1 * 2.0).sin()
            - 0.0002 * e * (mp * 2.0 - m).sin()
            - 0.0002 * omega.sin();
        let greatest_eclipse =
            Moment::from_jde(args.mean_jde + correction)?.to_universal(delta_t)?;

        Ok(Some(SolarEclipse {
            date: new_moon.moment.date(),
            greatest_eclipse,
            kind,
            magnitude,
            gamma,
            umbral_radius: u,
            lunation: new_moon.lunation,
        }))
    }
}

/// Kind of eclipse for a shadow-axis distance γ and an umbral radius u, `None` if there is none.
fn classify(gamma: f64, u: f64) -> Option<EclipseKind> {
    let g = gamma.abs();
    if g > PENUMBRAL_LIMIT + u {
        None
    } else if g >= CENTRAL_LIMIT {
        Some(EclipseKind::Partial)
    } else if u < 0.0 {
        Some(EclipseKind::Total)
    } else if u > 0.0047 {
        Some(EclipseKind::Annular)
    } else if u < 0.00464 * (1.0 - gamma * gamma).sqrt() {
        Some(EclipseKind::Hybrid)
    } else {
        Some(EclipseKind::Annular)
    }
}

/// Solar eclipses at the new moons of the lunations spanned by a date range.
///
/// The lunations are counted from the one whose new moon precedes `range.start()`, one per
/// synodic month that fits in the range. A range shorter than a month that starts late in a
/// lunation therefore only visits the preceding new moon: 2024-09-20..2024-10-05 examines the
/// new moon of 2024-09-03 and misses the annular eclipse of 2024-10-02. Start the range at
/// least one synodic month before the dates of interest.
///
/// # See also
/// * [`crate::moon_phase::moon_phases`] – how lunations are enumerated from the range.
pub fn solar_eclipses<D: DeltaT + ?Sized>(
    range: &DateRange,
    delta_t: &D,
) -> Result<Vec<SolarEclipse>, AstroError> {
    let eclipses = new_moons(range, delta_t)?
        .iter()
        .filter_map(|new_moon| SolarEclipse::at_new_moon(new_moon, delta_t).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "{} solar eclipses between {} and {}",
        eclipses.len(),
        range.start(),
        range.end()
    );
    Ok(eclipses)
}

#[cfg(test)]
mod solar_eclipse_test {
    use super::*;
    use crate::time::EspenakMeeus;
    use approx::assert_relative_eq;

    fn eclipse_of(lunation: i64) -> Option<SolarEclipse> {
        let new_moon = MoonPhase::new(lunation, PhaseKind::NewMoon, &EspenakMeeus).unwrap();
        SolarEclipse::at_new_moon(&new_moon, &EspenakMeeus).unwrap()
    }

    #[test]
    fn test_total_2009_07_22() {
        let eclipse = eclipse_of(118).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Total);
        assert_eq!(eclipse.date.to_string(), "2009-07-22");
        assert_relative_eq!(eclipse.gamma, 0.06921375, epsilon = 1e-7);
        assert!(eclipse.umbral_radius < 0.0);
        assert_eq!(eclipse.magnitude, None);

        let greatest = eclipse.greatest_eclipse;
        assert_eq!(
            (greatest.hour(), greatest.minute(), greatest.second()),
            (2, 35, 52)
        );
    }

    #[test]
    fn test_partial_1993_05_21() {
        let eclipse = eclipse_of(-82).unwrap();
        assert_eq!(eclipse.kind, EclipseKind::Partial);
        assert_eq!(eclipse.date.to_string(), "1993-05-21");
        assert_relative_eq!(eclipse.gamma, 1.1361109, epsilon = 1e-6);
        assert_relative_eq!(eclipse.magnitude.unwrap(), 0.7372362, epsilon = 1e-6);
        let greatest = eclipse.greatest_eclipse;
        assert_eq!(
            (greatest.hour(), greatest.minute(), greatest.second()),
            (14, 18, 20)
        );
    }

    #[test]
    fn test_1785() {
        let february = eclipse_of(-2658).unwrap();
        assert_eq!(february.kind, EclipseKind::Total);
        assert_relative_eq!(february.gamma, 0.0085829, epsilon = 1e-6);

        let august = eclipse_of(-2652).unwrap();
        assert_eq!(august.kind, EclipseKind::Annular);
        assert_relative_eq!(august.gamma, -0.0824851, epsilon = 1e-6);
    }

    #[test]
    fn test_no_eclipse_between_seasons() {
        // 2024-05-08, a month after the 2024-04-08 total eclipse
        assert!(eclipse_of(301).is_none());
    }

    #[test]
    fn test_rejects_other_phases() {
        let full = MoonPhase::new(118, PhaseKind::FullMoon, &EspenakMeeus).unwrap();
        assert_eq!(
            SolarEclipse::at_new_moon(&full, &EspenakMeeus),
            Err(AstroError::NotANewMoon("Full Moon".into()))
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(1.6, 0.01), None);
        assert_eq!(classify(-1.2, 0.01), Some(EclipseKind::Partial));
        assert_eq!(classify(0.3, -0.01), Some(EclipseKind::Total));
        assert_eq!(classify(0.3, 0.02), Some(EclipseKind::Annular));
        assert_eq!(classify(0.1, 0.002), Some(EclipseKind::Hybrid));
        assert_eq!(classify(0.1, 0.00463), Some(EclipseKind::Annular));
    }
}
