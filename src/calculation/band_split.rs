//! Reported hour breakdown.
//!
//! The hours reported per band come from the final cumulative total alone.
//! The per-punch apportionment in [`super::AccrualState`] only prices hours;
//! both agree on the total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AccrualPolicy;

/// Hours per band for a period total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandBreakdown {
    /// Hours up to the regular threshold.
    pub regular: Decimal,
    /// Hours between the regular and double-time thresholds.
    pub overtime: Decimal,
    /// Hours beyond the double-time threshold.
    pub doubletime: Decimal,
}

/// Splits a period's total hours into bands.
///
/// - `regular = min(total, 40)`
/// - `overtime = max(0, min(total - 40, 8))`
/// - `doubletime = max(0, total - 48)`
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::split_total_hours;
/// use payroll_engine::config::AccrualPolicy;
/// use rust_decimal::Decimal;
///
/// let split = split_total_hours(Decimal::new(50, 0), &AccrualPolicy::default());
/// assert_eq!(split.regular, Decimal::new(40, 0));
/// assert_eq!(split.overtime, Decimal::new(8, 0));
/// assert_eq!(split.doubletime, Decimal::new(2, 0));
/// ```
pub fn split_total_hours(total_hours: Decimal, policy: &AccrualPolicy) -> BandBreakdown {
    let regular = total_hours.min(policy.regular_threshold_hours);
    let overtime = (total_hours - policy.regular_threshold_hours)
        .min(policy.overtime_band_hours())
        .max(Decimal::ZERO);
    let doubletime = (total_hours - policy.doubletime_threshold_hours).max(Decimal::ZERO);

    BandBreakdown {
        regular,
        overtime,
        doubletime,
    }
}
