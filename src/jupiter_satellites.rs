//! # Galilean satellites
//!
//! Apparent positions of Io, Europa, Ganymede and Callisto relative to Jupiter, low-accuracy method
//! (Meeus, *Astronomical Algorithms*, chapter 44).
//!
//! ## Overview
//!
//! Coordinates are rectangular, in units of Jupiter's equatorial radius, as seen from the Earth:
//! X is positive towards the west, along Jupiter's equator, and Y positive towards the north,
//! along its rotation axis. The method neglects the mutual perturbations of the satellites beyond
//! their main terms and is good to a few hundredths of a radius.

use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::J2000;
use crate::time::{DeltaT, Moment};
use crate::units::Degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalileanMoon {
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl std::fmt::Display for GalileanMoon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GalileanMoon::Io => "Io",
            GalileanMoon::Europa => "Europa",
            GalileanMoon::Ganymede => "Ganymede",
            GalileanMoon::Callisto => "Callisto",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatellitePosition {
    pub moon: GalileanMoon,
    /// Jupiter radii, positive west.
    pub x: f64,
    /// Jupiter radii, positive north.
    pub y: f64,
}

/// Positions of the four Galilean satellites.
///
/// Arguments
/// ---------
/// * `moment`: instant in universal time; ΔT of its calendar year is added first.
/// * `delta_t`: TT − UT provider.
///
/// Returns
/// --------
/// * Io, Europa, Ganymede and Callisto, in that order.
pub fn galilean_satellites<D: DeltaT + ?Sized>(
    moment: &Moment,
    delta_t: &D,
) -> Result<[SatellitePosition; 4], AstroError> {
    let d = moment.to_dynamical(delta_t)?.jde() - J2000;

    // Long-period term in Jupiter's mean longitude
    let v = Degrees::new(172.74 + 0.00111588 * d).reduce();
    let m = Degrees::new(357.529 + 0.9856003 * d).reduce();
    let n = Degrees::new(20.020 + 0.0830853 * d + 0.329 * v.sin()).reduce();
    let j = Degrees::new(66.115 + 0.9025179 * d - 0.329 * v.sin()).reduce();

    // Equations of the centre of the Earth and of Jupiter
    let a = 1.915 * m.sin() + 0.020 * (m * 2.0).sin();
    let b = 5.555 * n.sin() + 0.168 * (n * 2.0).sin();
    let k = j + Degrees::new(a - b);

    let earth_radius = 1.00014 - 0.01671 * m.cos() - 0.00014 * (m * 2.0).cos();
    let jupiter_radius = 5.20872 - 0.25208 * n.cos() - 0.00611 * (n * 2.0).cos();
    let distance = (jupiter_radius * jupiter_radius + earth_radius * earth_radius
        - 2.0 * jupiter_radius * earth_radius * k.cos())
    .sqrt();
    // Phase angle of Jupiter seen from the Earth
    let psi = Degrees::new((earth_radius / distance * k.sin()).asin().to_degrees());

    let lambda = Degrees::new(34.35 + 0.083091 * d + 0.329 * v.sin() + b);
    let ds = 3.12 * (lambda + Degrees::new(42.8)).sin();
    let de = ds
        - 2.22 * psi.sin() * (lambda + Degrees::new(22.0)).cos()
        - 1.30 * (jupiter_radius - distance) / distance * (lambda - Degrees::new(100.5)).sin();
    let de = Degrees::new(de);

    // Retarded by the light time from Jupiter
    let t = d - distance / 173.0;
    let longitude = |epoch: f64, rate: f64| Degrees::new(epoch + rate * t) + psi - Degrees::new(b);
    let u1 = longitude(163.8069, 203.4058646);
    let u2 = longitude(358.4140, 101.2916335);
    let u3 = longitude(5.7176, 50.2345180);
    let u4 = longitude(224.8092, 21.4879800);
    let g = Degrees::new(331.18 + 50.310482 * t);
    let h = Degrees::new(87.45 + 21.569231 * t);

    let satellites = [
        (
            GalileanMoon::Io,
            u1 + Degrees::new(0.473 * ((u1 - u2) * 2.0).sin()),
            5.9057 - 0.0244 * ((u1 - u2) * 2.0).cos(),
        ),
        (
            GalileanMoon::Europa,
            u2 + Degrees::new(1.065 * ((u2 - u3) * 2.0).sin()),
            9.3966 - 0.0882 * ((u2 - u3) * 2.0).cos(),
        ),
        (
            GalileanMoon::Ganymede,
            u3 + Degrees::new(0.165 * g.sin()),
            14.9883 - 0.0216 * g.cos(),
        ),
        (
            GalileanMoon::Callisto,
            u4 + Degrees::new(0.843 * h.sin()),
            26.3627 - 0.1939 * h.cos(),
        ),
    ];

    Ok(satellites.map(|(moon, u, r)| SatellitePosition {
        moon,
        x: r * u.sin(),
        y: -r * u.cos() * de.sin(),
    }))
}
