//! Configuration types for overtime accrual.
//!
//! This module contains the accrual policy: the weekly thresholds and the
//! wage multipliers applied past them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayBand;

/// Cumulative hours after which overtime starts.
pub const DEFAULT_REGULAR_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Cumulative hours after which double-time starts.
pub const DEFAULT_DOUBLETIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Wage multiplier for overtime hours (1.5).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Wage multiplier for double-time hours (2.0).
pub const DEFAULT_DOUBLETIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Weekly overtime rules.
///
/// Every field is optional in YAML; omitted fields take the standard
/// 40 / 48 hour thresholds and 1.5× / 2× multipliers.
///
/// # Example
///
/// ```
/// use payroll_engine::config::AccrualPolicy;
/// use rust_decimal::Decimal;
///
/// let policy: AccrualPolicy = serde_yaml::from_str("regular_threshold_hours: 38").unwrap();
/// assert_eq!(policy.regular_threshold_hours, Decimal::new(38, 0));
/// assert_eq!(policy.doubletime_threshold_hours, Decimal::new(48, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualPolicy {
    /// Cumulative hours billed at the base rate.
    pub regular_threshold_hours: Decimal,
    /// Cumulative hours after which double-time applies.
    pub doubletime_threshold_hours: Decimal,
    /// Multiplier for hours between the two thresholds.
    pub overtime_multiplier: Decimal,
    /// Multiplier for hours past the double-time threshold.
    pub doubletime_multiplier: Decimal,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            regular_threshold_hours: DEFAULT_REGULAR_THRESHOLD_HOURS,
            doubletime_threshold_hours: DEFAULT_DOUBLETIME_THRESHOLD_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            doubletime_multiplier: DEFAULT_DOUBLETIME_MULTIPLIER,
        }
    }
}

impl AccrualPolicy {
    /// Returns the width of the overtime band (8 hours by default).
    pub fn overtime_band_hours(&self) -> Decimal {
        self.doubletime_threshold_hours - self.regular_threshold_hours
    }

    /// Returns the wage multiplier for a band.
    pub fn multiplier(&self, band: PayBand) -> Decimal {
        match band {
            PayBand::Regular => Decimal::ONE,
            PayBand::Overtime => self.overtime_multiplier,
            PayBand::Doubletime => self.doubletime_multiplier,
        }
    }

    /// Checks the thresholds are ordered and the multipliers never cut pay.
    pub fn validate(&self) -> EngineResult<()> {
        if self.regular_threshold_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "regular threshold must be positive, got {}",
                    self.regular_threshold_hours
                ),
            });
        }
        if self.doubletime_threshold_hours < self.regular_threshold_hours {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "doubletime threshold {} is below regular threshold {}",
                    self.doubletime_threshold_hours, self.regular_threshold_hours
                ),
            });
        }
        if self.overtime_multiplier < Decimal::ONE || self.doubletime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "multipliers must be at least 1, got overtime {} and doubletime {}",
                    self.overtime_multiplier, self.doubletime_multiplier
                ),
            });
        }
        Ok(())
    }
}
