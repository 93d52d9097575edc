//! Time punch model and timestamp parsing.
//!
//! Punches arrive with wall-clock timestamps as text. [`TimePunch::parse`]
//! turns them into a [`ParsedPunch`] the accrual fold can order and measure.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The wire format of punch timestamps (`yyyy-MM-dd HH:mm:ss`).
pub const PUNCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// One contiguous work interval, as recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePunch {
    /// The job this interval was worked under.
    pub job: String,
    /// Start timestamp text.
    pub start: String,
    /// End timestamp text.
    pub end: String,
}

impl TimePunch {
    /// Creates a punch from its job name and timestamp text.
    pub fn new(job: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both timestamps.
    ///
    /// `employee` and `index` only feed the error, so a failure identifies the
    /// offending punch.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::TimePunch;
    /// use rust_decimal::Decimal;
    ///
    /// let punch = TimePunch::new("Shop - Laborer", "2022-02-18 09:00:00", "2022-02-18 16:30:00");
    /// let parsed = punch.parse("Mike", 0).unwrap();
    /// assert_eq!(parsed.hours(), Decimal::new(75, 1));
    /// ```
    pub fn parse(&self, employee: &str, index: usize) -> EngineResult<ParsedPunch> {
        let start = parse_timestamp(&self.start, employee, index)?;
        let end = parse_timestamp(&self.end, employee, index)?;

        Ok(ParsedPunch {
            index,
            job: self.job.clone(),
            start,
            end,
        })
    }
}

fn parse_timestamp(value: &str, employee: &str, index: usize) -> EngineResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, PUNCH_TIMESTAMP_FORMAT).map_err(|e| {
        EngineError::MalformedTimestamp {
            employee: employee.to_string(),
            punch_index: index,
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}

/// A punch with parsed timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPunch {
    /// Position of the punch in the employee's list as given.
    pub index: usize,
    /// The job this interval was worked under.
    pub job: String,
    /// Local wall-clock start.
    pub start: NaiveDateTime,
    /// Local wall-clock end.
    pub end: NaiveDateTime,
}

impl ParsedPunch {
    /// Returns the duration in fractional hours at second resolution.
    ///
    /// End before start is not rejected; the result is then negative.
    pub fn hours(&self) -> Decimal {
        let seconds = (self.end - self.start).num_seconds();
        Decimal::from(seconds) / SECONDS_PER_HOUR
    }
}
