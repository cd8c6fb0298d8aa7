//! # Reference systems and coordinate transforms
//!
//! Spherical coordinate types of the three frames the engine works in, the observer they are
//! related through, and the rectangular helpers shared by the position resolvers.
//!
//! ## Overview
//!
//! - [`EclipticCoordinates`] (λ, β) ↔ [`EquatorialCoordinates`] (α, δ): rotation about the vernal
//!   equinox direction by the obliquity ε.
//! - [`EquatorialCoordinates`] ↔ [`HorizontalCoordinates`] (A, h): spherical triangle pole –
//!   zenith – object, driven by the local sidereal time and the observer's latitude.
//! - [`rotmt`] builds the elementary rotation matrices used to carry an orbit from its own plane
//!   into the ecliptic frame.
//! - [`cartesian_to_spherical`] / [`spherical_to_cartesian`] link `nalgebra` vectors and angles.
//!
//! ## Conventions
//!
//! - Longitudes of observers are measured **positive west** of Greenwich.
//! - Azimuth is measured from the **South**, increasing westward, in `[0°, 360°)`.
//! - Right ascension and ecliptic longitude are reduced into `[0°, 360°)`.

use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::astro_errors::{ensure_finite, AstroError};
use crate::units::{Degrees, Radians, RightAscension};

/// Principal axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The matrix is an **active** rotation: `x' = R · x` turns the vector `x` by `angle`
/// counter-clockwise about `axis` in a fixed frame.
///
/// # See also
/// * [`crate::heliocentric`] – composes `Rz(Ω)·Rx(ι)·Rz(ω)` to leave the orbital plane.
pub fn rotmt(angle: Radians, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, angle.value()).into_inner()
}

/// Longitude (reduced), latitude and norm of a rectangular vector.
///
/// A zero vector maps to `(0°, 0°, 0)`.
pub fn cartesian_to_spherical(v: &Vector3<f64>) -> (Degrees, Degrees, f64) {
    let norm = v.norm();
    if norm == 0.0 {
        return (Degrees::new(0.0), Degrees::new(0.0), 0.0);
    }

    let longitude = Radians::new(v.y.atan2(v.x)).to_degrees().reduce();
    let latitude = Radians::new(v.z.atan2(v.x.hypot(v.y))).to_degrees();
    (longitude, latitude, norm)
}

/// Rectangular vector of a direction (longitude, latitude) at distance `radius`.
pub fn spherical_to_cartesian(longitude: Degrees, latitude: Degrees, radius: f64) -> Vector3<f64> {
    Vector3::new(
        radius * latitude.cos() * longitude.cos(),
        radius * latitude.cos() * longitude.sin(),
        radius * latitude.sin(),
    )
}

/// Ecliptic longitude λ and latitude β.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    pub longitude: Degrees,
    pub latitude: Degrees,
}

impl EclipticCoordinates {
    pub fn new(longitude: Degrees, latitude: Degrees) -> Self {
        EclipticCoordinates {
            longitude,
            latitude,
        }
    }

    /// Equatorial coordinates for the obliquity `obliquity`.
    ///
    /// ```text
    /// tan α = (sin λ cos ε − tan β sin ε) / cos λ
    /// sin δ = sin β cos ε + cos β sin ε sin λ
    /// ```
    pub fn to_equatorial(&self, obliquity: Degrees) -> EquatorialCoordinates {
        let (lambda, beta, eps) = (self.longitude, self.latitude, obliquity);

        let alpha = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
        let delta = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();

        EquatorialCoordinates {
            right_ascension: Radians::new(alpha).to_degrees().reduce(),
            declination: Radians::new(delta).to_degrees(),
        }
    }
}

/// Right ascension α and declination δ, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Degrees, declination: Degrees) -> Self {
        EquatorialCoordinates {
            right_ascension,
            declination,
        }
    }

    pub fn from_right_ascension(right_ascension: RightAscension, declination: Degrees) -> Self {
        EquatorialCoordinates::new(right_ascension.to_degrees(), declination)
    }

    /// Right ascension split into hours, minutes and seconds.
    pub fn right_ascension_hms(&self) -> Result<RightAscension, AstroError> {
        self.right_ascension.to_right_ascension()
    }

    /// Ecliptic coordinates for the obliquity `obliquity`.
    ///
    /// ```text
    /// tan λ = (sin α cos ε + tan δ sin ε) / cos α
    /// sin β = sin δ cos ε − cos δ sin ε sin α
    /// ```
    pub fn to_ecliptic(&self, obliquity: Degrees) -> EclipticCoordinates {
        let (alpha, delta, eps) = (self.right_ascension, self.declination, obliquity);

        let lambda = (alpha.sin() * eps.cos() + delta.tan() * eps.sin()).atan2(alpha.cos());
        let beta = (delta.sin() * eps.cos() - delta.cos() * eps.sin() * alpha.sin()).asin();

        EclipticCoordinates {
            longitude: Radians::new(lambda).to_degrees().reduce(),
            latitude: Radians::new(beta).to_degrees(),
        }
    }

    /// Horizontal coordinates seen by `observer` when the local sidereal time is
    /// `local_sidereal_time` (hour angle H = θ − α).
    ///
    /// ```text
    /// tan A = sin H / (cos H sin φ − tan δ cos φ)
    /// sin h = sin φ sin δ + cos φ cos δ cos H
    /// ```
    pub fn to_horizontal(
        &self,
        observer: &Observer,
        local_sidereal_time: Degrees,
    ) -> HorizontalCoordinates {
        let hour_angle = (local_sidereal_time - self.right_ascension).reduce();
        let (phi, delta) = (observer.latitude, self.declination);

        let azimuth = hour_angle
            .sin()
            .atan2(hour_angle.cos() * phi.sin() - delta.tan() * phi.cos());
        let altitude = (phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour_angle.cos()).asin();

        HorizontalCoordinates {
            azimuth: Radians::new(azimuth).to_degrees().reduce(),
            altitude: Radians::new(altitude).to_degrees(),
        }
    }
}

/// Azimuth A (from the South, westward) and altitude h above the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    pub azimuth: Degrees,
    pub altitude: Degrees,
}

impl HorizontalCoordinates {
    pub fn new(azimuth: Degrees, altitude: Degrees) -> Self {
        HorizontalCoordinates { azimuth, altitude }
    }

    /// Inverse of [`EquatorialCoordinates::to_horizontal`].
    ///
    /// ```text
    /// tan H = sin A / (cos A sin φ + tan h cos φ)
    /// sin δ = sin φ sin h − cos φ cos h cos A
    /// ```
    pub fn to_equatorial(
        &self,
        observer: &Observer,
        local_sidereal_time: Degrees,
    ) -> EquatorialCoordinates {
        let (a, h, phi) = (self.azimuth, self.altitude, observer.latitude);

        let hour_angle = a.sin().atan2(a.cos() * phi.sin() + h.tan() * phi.cos());
        let delta = (phi.sin() * h.sin() - phi.cos() * h.cos() * a.cos()).asin();

        EquatorialCoordinates {
            right_ascension: (local_sidereal_time - Radians::new(hour_angle).to_degrees())
                .reduce(),
            declination: Radians::new(delta).to_degrees(),
        }
    }
}

/// A place on the Earth: geographic latitude φ (north positive) and longitude L (west positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl Observer {
    /// Build an observer from a latitude and a **west-positive** longitude.
    ///
    /// Returns
    /// --------
    /// * The observer, or [`AstroError::InvalidLatitude`] when |φ| > 90°, or
    ///   [`AstroError::NonFiniteInput`] on NaN / infinite input.
    pub fn new(latitude: Degrees, longitude_west: Degrees) -> Result<Self, AstroError> {
        let phi = ensure_finite("observer latitude", latitude.value())?;
        ensure_finite("observer longitude", longitude_west.value())?;
        if phi.abs() > 90.0 {
            return Err(AstroError::InvalidLatitude(phi));
        }
        Ok(Observer {
            latitude,
            longitude: longitude_west,
        })
    }

    /// Build an observer from an east-positive longitude (ISO 6709 convention).
    pub fn from_east_longitude(
        latitude: Degrees,
        longitude_east: Degrees,
    ) -> Result<Self, AstroError> {
        Observer::new(latitude, -longitude_east)
    }
}
