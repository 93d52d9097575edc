//! Payroll result model.
//!
//! This module contains [`PayrollResult`], the per-employee record the engine
//! emits, and [`PayBand`], the three wage bands hours are billed in.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits every reported figure carries.
pub const REPORT_DECIMAL_PLACES: u32 = 4;

/// Rounds to [`REPORT_DECIMAL_PLACES`] (half away from zero) and fixes the
/// scale, so the value always renders with exactly four fractional digits.
///
/// # Example
///
/// ```
/// use payroll_engine::models::to_report_precision;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_report_precision(Decimal::new(8, 0)).to_string(), "8.0000");
/// assert_eq!(to_report_precision(Decimal::new(123456789, 8)).to_string(), "1.2346");
/// ```
pub fn to_report_precision(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(REPORT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(REPORT_DECIMAL_PLACES);
    rounded
}

/// A wage band on the cumulative-hours axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBand {
    /// Hours up to the regular threshold, at the base rate.
    Regular,
    /// Hours between the regular and double-time thresholds.
    Overtime,
    /// Hours beyond the double-time threshold.
    Doubletime,
}

/// Payroll totals for one employee.
///
/// All figures are held at four fractional digits and serialize as text,
/// e.g. `"40.0000"`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult::new(
///     "Mike",
///     Decimal::new(8, 0),
///     Decimal::ZERO,
///     Decimal::ZERO,
///     Decimal::new(160, 0),
///     Decimal::new(40, 0),
/// );
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["regular"], "8.0000");
/// assert_eq!(json["wageTotal"], "160.0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    /// The employee's name.
    pub employee: String,
    /// Hours within the regular band.
    #[serde(with = "rust_decimal::serde::str")]
    pub regular: Decimal,
    /// Hours within the overtime band.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime: Decimal,
    /// Hours beyond the double-time threshold.
    #[serde(with = "rust_decimal::serde::str")]
    pub doubletime: Decimal,
    /// Total wages across all bands and jobs.
    #[serde(with = "rust_decimal::serde::str")]
    pub wage_total: Decimal,
    /// Total benefits accrued.
    #[serde(with = "rust_decimal::serde::str")]
    pub benefit_total: Decimal,
}

impl PayrollResult {
    /// Creates a result, bringing every figure to report precision.
    pub fn new(
        employee: impl Into<String>,
        regular: Decimal,
        overtime: Decimal,
        doubletime: Decimal,
        wage_total: Decimal,
        benefit_total: Decimal,
    ) -> Self {
        Self {
            employee: employee.into(),
            regular: to_report_precision(regular),
            overtime: to_report_precision(overtime),
            doubletime: to_report_precision(doubletime),
            wage_total: to_report_precision(wage_total),
            benefit_total: to_report_precision(benefit_total),
        }
    }

    /// Returns the reported hours across all three bands.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }
}
