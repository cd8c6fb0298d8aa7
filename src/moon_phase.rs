//! # Moon phases
//!
//! Instants of the principal lunar phases (Meeus, *Astronomical Algorithms*, chapter 49).
//!
//! ## Overview
//!
//! A lunation number `k` counts synodic months from the new moon of 2000-01-06 (`k = 0`); the
//! quarters of lunation `k` sit at `k + 0.25`, `k + 0.5` and `k + 0.75`. For a given phase:
//!
//! 1. `T = k / 1236.85` and the mean phase JDE is a polynomial in (k, T);
//! 2. the mean anomalies of the Sun (M) and of the Moon (M′), the Moon's argument of latitude (F)
//!    and the longitude of its ascending node (Ω) are polynomials in (k, T), gathered in
//!    [`LunationArguments`];
//! 3. a phase specific periodic series in (M, M′, F, Ω) is added, terms in M being scaled by the
//!    Earth eccentricity factor E or E²; quarters additionally get the ±W correction;
//! 4. fourteen planetary arguments add a common correction;
//! 5. the dynamical JDE is converted to universal time with the [`DeltaT`] collaborator.
//!
//! [`moon_phases`] walks a [`DateRange`] one synodic month at a time from the lunation of the range
//! start, and emits the four phases of every lunation it visits, in order.

use itertools::iproduct;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{horner, JDE, LUNATIONS_PER_CENTURY, LUNATIONS_PER_YEAR, SYNODIC_MONTH};
use crate::time::{DateRange, DeltaT, Moment};
use crate::units::Degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhaseKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl PhaseKind {
    /// The four phases in the order they occur within a lunation.
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::NewMoon,
        PhaseKind::FirstQuarter,
        PhaseKind::FullMoon,
        PhaseKind::LastQuarter,
    ];

    /// Fraction of the lunation at which the phase occurs.
    pub fn fraction(self) -> f64 {
        match self {
            PhaseKind::NewMoon => 0.0,
            PhaseKind::FirstQuarter => 0.25,
            PhaseKind::FullMoon => 0.5,
            PhaseKind::LastQuarter => 0.75,
        }
    }

    /// Phase at a lunation fraction; only exact quarters are accepted.
    pub fn from_fraction(fraction: f64) -> Result<Self, AstroError> {
        PhaseKind::ALL
            .into_iter()
            .find(|kind| kind.fraction() == fraction)
            .ok_or(AstroError::InvalidPhaseFraction(fraction))
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::NewMoon => "New Moon",
            PhaseKind::FirstQuarter => "First Quarter",
            PhaseKind::FullMoon => "Full Moon",
            PhaseKind::LastQuarter => "Last Quarter",
        };
        f.write_str(name)
    }
}

/// A lunar phase instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub kind: PhaseKind,
    /// Integer lunation number k.
    pub lunation: i64,
    /// Instant of the phase, universal time.
    pub moment: Moment,
    /// Instant of the phase, dynamical time.
    pub jde: JDE,
}

impl MoonPhase {
    /// Compute one phase of a lunation.
    ///
    /// Arguments
    /// ---------
    /// * `lunation`: integer lunation number k (0 for the new moon of 2000-01-06).
    /// * `kind`: which phase of that lunation.
    /// * `delta_t`: TT − UT provider.
    ///
    /// Returns
    /// --------
    /// * The phase, or [`AstroError::NonFiniteDeltaT`] if ΔT is unusable.
    pub fn new<D: DeltaT + ?Sized>(
        lunation: i64,
        kind: PhaseKind,
        delta_t: &D,
    ) -> Result<Self, AstroError> {
        let jde = phase_jde_of(lunation, kind);
        let moment = Moment::from_jde(jde)?.to_universal(delta_t)?;
        trace!("lunation {lunation} {kind}: JDE {jde}, UT {moment}");

        Ok(MoonPhase {
            kind,
            lunation,
            moment,
            jde,
        })
    }
}

/// Mean arguments of a lunation, angles reduced to `[0°, 360°)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LunationArguments {
    pub t: f64,
    /// Mean phase, JDE.
    pub mean_jde: JDE,
    /// Eccentricity factor of the Earth's orbit.
    pub e: f64,
    pub sun_anomaly: Degrees,
    pub moon_anomaly: Degrees,
    pub latitude_argument: Degrees,
    pub ascending_node: Degrees,
}

impl LunationArguments {
    /// Arguments for lunation `k` (fraction included) evaluated with centuries `t`.
    pub fn new(k: f64, t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        LunationArguments {
            t,
            mean_jde: 2451550.09766 + 29.530588861 * k + 0.00015437 * t2 - 0.000000150 * t3
                + 0.00000000073 * t4,
            e: horner(&[1.0, -0.002516, -0.0000074], t),
            sun_anomaly: Degrees::new(
                2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3,
            )
            .reduce(),
            moon_anomaly: Degrees::new(
                201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
                    - 0.000000058 * t4,
            )
            .reduce(),
            latitude_argument: Degrees::new(
                160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
                    + 0.000000011 * t4,
            )
            .reduce(),
            ascending_node: Degrees::new(
                124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3,
            )
            .reduce(),
        }
    }

    /// Arguments of lunation `k` with `T = k / 1236.85`.
    pub fn from_lunation(k: f64) -> Self {
        Self::new(k, k / LUNATIONS_PER_CENTURY)
    }

    /// Linear combination `a·M + b·M′ + c·F + d·Ω`.
    fn combine(&self, multipliers: &[i8; 4]) -> Degrees {
        let args = [
            self.sun_anomaly,
            self.moon_anomaly,
            self.latitude_argument,
            self.ascending_node,
        ];
        multipliers
            .iter()
            .zip(args)
            .fold(Degrees::new(0.0), |acc, (&k, angle)| acc + angle * k as f64)
    }
}

/// Multipliers of (M, M′, F, Ω), power of E, then the New Moon and Full Moon amplitudes (days).
#[rustfmt::skip]
const NEW_FULL_TERMS: [([i8; 4], i32, f64, f64); 25] = [
    ([ 0, 1,  0, 0], 0, -0.40720, -0.40614),
    ([ 1, 0,  0, 0], 1,  0.17241,  0.17302),
    ([ 0, 2,  0, 0], 0,  0.01608,  0.01614),
    ([ 0, 0,  2, 0], 0,  0.01039,  0.01043),
    ([-1, 1,  0, 0], 1,  0.00739,  0.00734),
    ([ 1, 1,  0, 0], 1, -0.00514, -0.00515),
    ([ 2, 0,  0, 0], 2,  0.00208,  0.00209),
    ([ 0, 1, -2, 0], 0, -0.00111, -0.00111),
    ([ 0, 1,  2, 0], 0, -0.00057, -0.00057),
    ([ 1, 2,  0, 0], 1,  0.00056,  0.00056),
    ([ 0, 3,  0, 0], 0, -0.00042, -0.00042),
    ([ 1, 0,  2, 0], 1,  0.00042,  0.00042),
    ([ 1, 0, -2, 0], 1,  0.00038,  0.00038),
    ([-1, 2,  0, 0], 1, -0.00024, -0.00024),
    ([ 0, 0,  0, 1], 0, -0.00017, -0.00017),
    ([ 2, 1,  0, 0], 0, -0.00007, -0.00007),
    ([ 0, 2, -2, 0], 0,  0.00004,  0.00004),
    ([ 3, 0,  0, 0], 0,  0.00004,  0.00004),
    ([ 1, 1, -2, 0], 0,  0.00003,  0.00003),
    ([ 0, 2,  2, 0], 0,  0.00003,  0.00003),
    ([ 1, 1,  2, 0], 0, -0.00003, -0.00003),
    ([-1, 1,  2, 0], 0,  0.00003,  0.00003),
    ([-1, 1, -2, 0], 0, -0.00002, -0.00002),
    ([ 1, 3,  0, 0], 0, -0.00002, -0.00002),
    ([ 0, 4,  0, 0], 0,  0.00002,  0.00002),
];

/// Multipliers of (M, M′, F, Ω), power of E, amplitude (days), for both quarters.
#[rustfmt::skip]
const QUARTER_TERMS: [([i8; 4], i32, f64); 25] = [
    ([ 0, 1,  0, 0], 0, -0.62801),
    ([ 1, 0,  0, 0], 1,  0.17172),
    ([ 1, 1,  0, 0], 1, -0.01183),
    ([ 0, 2,  0, 0], 0,  0.00862),
    ([ 0, 0,  2, 0], 0,  0.00804),
    ([-1, 1,  0, 0], 1,  0.00454),
    ([ 2, 0,  0, 0], 2,  0.00204),
    ([ 0, 1, -2, 0], 0, -0.00180),
    ([ 0, 1,  2, 0], 0, -0.00070),
    ([ 0, 3,  0, 0], 0, -0.00040),
    ([-1, 2,  0, 0], 1, -0.00034),
    ([ 1, 0,  2, 0], 1,  0.00032),
    ([ 1, 0, -2, 0], 1,  0.00032),
    ([ 2, 1,  0, 0], 2, -0.00028),
    ([ 1, 2,  0, 0], 1,  0.00027),
    ([ 0, 0,  0, 1], 0, -0.00017),
    ([-1, 1, -2, 0], 0, -0.00005),
    ([ 0, 2,  2, 0], 0,  0.00004),
    ([ 1, 1,  2, 0], 0, -0.00004),
    ([-2, 1,  0, 0], 0,  0.00004),
    ([ 1, 1, -2, 0], 0,  0.00003),
    ([ 3, 0,  0, 0], 0,  0.00003),
    ([ 0, 2, -2, 0], 0,  0.00002),
    ([-1, 1,  2, 0], 0,  0.00002),
    ([ 1, 3,  0, 0], 0, -0.00002),
];

/// Planetary arguments A₁..A₁₄: constant, rate per lunation, T² rate (degrees), amplitude (days).
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64, f64); 14] = [
    (299.77,  0.107408, -0.009173, 0.000325),
    (251.88,  0.016321,  0.0,      0.000165),
    (251.83, 26.651886,  0.0,      0.000164),
    (349.42, 36.412478,  0.0,      0.000126),
    ( 84.66, 18.206239,  0.0,      0.000110),
    (141.74, 53.303771,  0.0,      0.000062),
    (207.14,  2.453732,  0.0,      0.000060),
    (154.84,  7.306860,  0.0,      0.000056),
    ( 34.52, 27.261239,  0.0,      0.000047),
    (207.19,  0.121824,  0.0,      0.000042),
    (291.34,  1.844379,  0.0,      0.000040),
    (161.72, 24.198154,  0.0,      0.000037),
    (239.56, 25.513099,  0.0,      0.000035),
    (331.55,  3.592518,  0.0,      0.000023),
];

fn planetary_correction(k: f64, t: f64) -> f64 {
    PLANETARY_TERMS
        .iter()
        .map(|&(a0, a1, a2, amp)| amp * Degrees::new(a0 + a1 * k + a2 * t * t).reduce().sin())
        .sum()
}

fn periodic_correction(args: &LunationArguments, kind: PhaseKind) -> f64 {
    let e = args.e;
    match kind {
        PhaseKind::NewMoon | PhaseKind::FullMoon => NEW_FULL_TERMS
            .iter()
            .map(|(multipliers, e_power, new_amp, full_amp)| {
                let amp = if kind == PhaseKind::NewMoon {
                    new_amp
                } else {
                    full_amp
                };
                amp * e.powi(*e_power) * args.combine(multipliers).sin()
            })
            .sum(),
        PhaseKind::FirstQuarter | PhaseKind::LastQuarter => {
            let series = QUARTER_TERMS
                .iter()
                .map(|(multipliers, e_power, amp)| {
                    amp * e.powi(*e_power) * args.combine(multipliers).sin()
                })
                .sum::<f64>();

            let (m, mp, f) = (
                args.sun_anomaly,
                args.moon_anomaly,
                args.latitude_argument,
            );
            let w = 0.00306 - 0.00038 * e * m.cos() + 0.00026 * mp.cos()
                - 0.00002 * (mp - m).cos()
                + 0.00002 * (mp + m).cos()
                + 0.00002 * (f * 2.0).cos();

            if kind == PhaseKind::FirstQuarter {
                series + w
            } else {
                series - w
            }
        }
    }
}

fn phase_jde_of(lunation: i64, kind: PhaseKind) -> JDE {
    let k = lunation as f64 + kind.fraction();
    let args = LunationArguments::from_lunation(k);
    args.mean_jde + periodic_correction(&args, kind) + planetary_correction(k, args.t)
}

/// Instant (JDE, dynamical time) of the phase at `lunation + fraction`.
///
/// Returns
/// --------
/// * The JDE, or [`AstroError::InvalidPhaseFraction`] when `fraction` is not one of
///   0, 0.25, 0.5, 0.75.
pub fn phase_jde(lunation: i64, fraction: f64) -> Result<JDE, AstroError> {
    Ok(phase_jde_of(lunation, PhaseKind::from_fraction(fraction)?))
}

/// Lunation number whose new moon precedes the beginning of the year fraction of `moment`.
pub fn lunation_of(moment: &Moment) -> i64 {
    ((moment.decimal_year() - 2000.0) * LUNATIONS_PER_YEAR).floor() as i64
}

/// Every principal phase of the lunations spanned by a date range.
///
/// Arguments
/// ---------
/// * `range`: closed date range, stepped one synodic month at a time from its start.
/// * `delta_t`: TT − UT provider used to convert the instants to universal time.
///
/// Returns
/// --------
/// * The four phases of each visited lunation, in chronological order. The first lunation starts
///   at or before `range.start()`, so its earliest phases can precede the range.
///   Only as many lunations as whole synodic months fit in the range are visited, so phases
///   near the end of a short range can be missing.
///
/// # See also
/// * [`new_moons`] – the new moons only.
pub fn moon_phases<D: DeltaT + ?Sized>(
    range: &DateRange,
    delta_t: &D,
) -> Result<Vec<MoonPhase>, AstroError> {
    let first = lunation_of(&range.start());
    let cycles = lunation_count(range);
    debug!(
        "moon phases from {} to {}: lunations {first}..{}",
        range.start(),
        range.end(),
        first + cycles as i64
    );

    iproduct!(0..cycles, PhaseKind::ALL)
        .map(|(cycle, kind)| MoonPhase::new(first + cycle as i64, kind, delta_t))
        .collect()
}

/// New moons of the lunations spanned by a date range, see [`moon_phases`].
pub fn new_moons<D: DeltaT + ?Sized>(
    range: &DateRange,
    delta_t: &D,
) -> Result<Vec<MoonPhase>, AstroError> {
    let first = lunation_of(&range.start());
    (0..lunation_count(range))
        .map(|cycle| MoonPhase::new(first + cycle as i64, PhaseKind::NewMoon, delta_t))
        .collect()
}

/// Number of synodic-month steps from the range start that stay within the range.
fn lunation_count(range: &DateRange) -> usize {
    let end = range.end().jde();
    std::iter::successors(Some(range.start().jde()), |d| Some(d + SYNODIC_MONTH))
        .take_while(|&d| d <= end)
        .count()
}

#[cfg(test)]
mod moon_phase_test {
    use super::*;
    use crate::time::EspenakMeeus;
    use approx::assert_relative_eq;

    #[test]
    fn test_phase_fraction() {
        assert_eq!(PhaseKind::from_fraction(0.75), Ok(PhaseKind::LastQuarter));
        assert_eq!(
            PhaseKind::from_fraction(0.3),
            Err(AstroError::InvalidPhaseFraction(0.3))
        );
        for kind in PhaseKind::ALL {
            assert_eq!(PhaseKind::from_fraction(kind.fraction()), Ok(kind));
        }
        assert_eq!(
            phase_jde(10, 1.0),
            Err(AstroError::InvalidPhaseFraction(1.0))
        );
    }

    #[test]
    fn test_new_moon_1977_02() {
        // New moon of 1977 February 18
        assert_relative_eq!(phase_jde(-283, 0.0).unwrap(), 2443192.65118, epsilon = 1e-5);
    }

    #[test]
    fn test_quarters_carry_w_correction() {
        let first = phase_jde(-283, 0.25).unwrap();
        assert_relative_eq!(first, 2443200.618699907, epsilon = 1e-6);
    }

    #[test]
    fn test_lunation_of() {
        let moment = Moment::from_date(2044, 1, 1).unwrap();
        assert_eq!(lunation_of(&moment), 544);
        let moment = Moment::from_date(1977, 2, 18).unwrap();
        assert_eq!(lunation_of(&moment), -283);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::from_dates((2024, 5, 10), (2024, 5, 10)).unwrap();
        let phases = moon_phases(&range, &EspenakMeeus).unwrap();
        assert_eq!(phases.len(), 4);
        assert!(phases.iter().all(|p| p.lunation == 301));
        assert_relative_eq!(phases[0].moment.jde(), 2460438.6401750436, epsilon = 1e-8);
        assert_eq!(
            phases.iter().map(|p| p.kind).collect::<Vec<_>>(),
            PhaseKind::ALL.to_vec()
        );
    }

    #[test]
    fn test_delta_t_collaborator() {
        let fixed = |_: f64| 0.0;
        let phase = MoonPhase::new(-283, PhaseKind::NewMoon, &fixed).unwrap();
        assert_relative_eq!(phase.moment.jde(), phase.jde, epsilon = 1e-12);

        let broken = |_: f64| f64::NAN;
        assert_eq!(
            MoonPhase::new(-283, PhaseKind::NewMoon, &broken),
            Err(AstroError::NonFiniteDeltaT(1977.0))
        );
    }
}
