use thiserror::Error;

/// Category of an [`AstroError`].
///
/// Every concrete failure belongs to one of four families:
/// * `Validation` – malformed input (dates, sexagesimal fields, NaN, ...), surfaced immediately.
/// * `InvalidArgument` – a selector the engine does not know how to handle (unknown body, ...).
/// * `InvalidState` – an internal wiring error, e.g. a lunation fraction that is not a quarter.
/// * `Convergence` – an iterative solver exceeded its iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidArgument,
    InvalidState,
    Convergence,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("Sexagesimal component out of range: {0}")]
    SexagesimalOutOfRange(String),

    #[error("Right ascension component out of range: {0}")]
    RightAscensionOutOfRange(String),

    #[error("Non finite numeric input for {0}")]
    NonFiniteInput(&'static str),

    #[error("Eccentricity must lie in [0, 1), got {0}")]
    InvalidEccentricity(f64),

    #[error("Latitude must lie in [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("Delta T provider returned a non finite value for year {0}")]
    NonFiniteDeltaT(f64),

    #[error("Invalid solver setting: {0}")]
    InvalidSolverSetting(String),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Geocentric position is undefined for {0}")]
    NotGeocentric(String),

    #[error("No orbital elements available for {0}")]
    NoOrbitalElements(String),

    #[error("Expected a new moon, got: {0}")]
    NotANewMoon(String),

    #[error("Lunation fraction must be one of 0, 0.25, 0.5 or 0.75, got {0}")]
    InvalidPhaseFraction(f64),

    #[error("Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity})")]
    KeplerNotConverged {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error("Light-time iteration did not converge after {0} iterations")]
    LightTimeNotConverged(usize),
}

impl AstroError {
    /// Category of this error, see [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        use AstroError::*;
        match self {
            InvalidDateRange(_)
            | InvalidCalendarDate(_)
            | SexagesimalOutOfRange(_)
            | RightAscensionOutOfRange(_)
            | NonFiniteInput(_)
            | InvalidEccentricity(_)
            | InvalidLatitude(_)
            | NonFiniteDeltaT(_)
            | InvalidSolverSetting(_) => ErrorKind::Validation,

            UnknownBody(_) | NotGeocentric(_) | NoOrbitalElements(_) | NotANewMoon(_) => {
                ErrorKind::InvalidArgument
            }

            InvalidPhaseFraction(_) => ErrorKind::InvalidState,

            KeplerNotConverged { .. } | LightTimeNotConverged(_) => ErrorKind::Convergence,
        }
    }
}

/// Reject NaN and infinite values with [`AstroError::NonFiniteInput`].
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, AstroError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AstroError::NonFiniteInput(name))
    }
}
