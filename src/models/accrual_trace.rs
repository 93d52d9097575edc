//! Accrual trace records.
//!
//! These records show how each punch was billed: which bands it fell in, at
//! what effective rate, and which punches were skipped for an unknown job.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayBand, PayrollResult};

/// The part of one punch billed in a single band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSegment {
    /// The band these hours fell in.
    pub band: PayBand,
    /// Hours billed in this band.
    pub hours: Decimal,
    /// The base rate times the band multiplier.
    pub rate: Decimal,
    /// Wages for this segment.
    pub amount: Decimal,
}

/// How one punch contributed to an employee's totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchAccrual {
    /// Position of the punch in the employee's list as given.
    pub punch_index: usize,
    /// The job the punch was billed under.
    pub job: String,
    /// The punch start.
    pub start: NaiveDateTime,
    /// Punch duration in hours.
    pub hours: Decimal,
    /// Benefits accrued by this punch.
    pub benefits: Decimal,
    /// Band segments in billing order (regular, overtime, double-time).
    pub segments: Vec<BandSegment>,
}

impl PunchAccrual {
    /// Returns the wages billed for this punch.
    pub fn wages(&self) -> Decimal {
        self.segments.iter().map(|s| s.amount).sum()
    }

    /// Returns the hours billed in the given band.
    pub fn hours_in(&self, band: PayBand) -> Decimal {
        self.segments
            .iter()
            .filter(|s| s.band == band)
            .map(|s| s.hours)
            .sum()
    }
}

/// A punch that contributed nothing because its job has no rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPunch {
    /// Position of the punch in the employee's list as given.
    pub punch_index: usize,
    /// The job name that had no rate.
    pub job: String,
}

/// The full accrual of one employee's punches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAccrual {
    /// Billed punches in chronological order.
    pub punches: Vec<PunchAccrual>,
    /// Punches skipped for an unknown job, in chronological order.
    pub skipped: Vec<SkippedPunch>,
    /// Cumulative hours after the last punch, unrounded.
    pub hours_worked: Decimal,
    /// Total wages, unrounded.
    pub wages: Decimal,
    /// Total benefits, unrounded.
    pub benefits: Decimal,
    /// The reported result at four fractional digits.
    pub result: PayrollResult,
}
