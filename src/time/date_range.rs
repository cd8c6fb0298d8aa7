use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;

use super::Moment;

/// A closed, inclusive interval `[start, end]` of moments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    start: Moment,
    end: Moment,
}

impl DateRange {
    /// Build a range, failing with [`AstroError::InvalidDateRange`] when `end` precedes `start`.
    pub fn new(start: Moment, end: Moment) -> Result<Self, AstroError> {
        if end < start {
            return Err(AstroError::InvalidDateRange(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(DateRange { start, end })
    }

    /// Range between two calendar dates, both taken at 0h.
    pub fn from_dates(
        start: (i32, u32, u32),
        end: (i32, u32, u32),
    ) -> Result<Self, AstroError> {
        DateRange::new(
            Moment::from_date(start.0, start.1, start.2)?,
            Moment::from_date(end.0, end.1, end.2)?,
        )
    }

    pub fn start(&self) -> Moment {
        self.start
    }

    pub fn end(&self) -> Moment {
        self.end
    }

    pub fn contains(&self, moment: &Moment) -> bool {
        self.start <= *moment && *moment <= self.end
    }

    /// Length of the range in days.
    pub fn days(&self) -> f64 {
        self.end.jde() - self.start.jde()
    }
}
