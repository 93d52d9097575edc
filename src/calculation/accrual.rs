//! Per-punch accrual.
//!
//! This module folds one punch into an employee's running totals, billing its
//! hours across the regular, overtime and double-time bands.
//!
//! ## Band apportionment
//!
//! The bands sit on the cumulative-hours axis of the whole period, not of the
//! punch. Starting from the hours already worked, a punch fills:
//! - the regular band up to the regular threshold (40h), at the base rate;
//! - the overtime band up to the double-time threshold (48h), at 1.5×;
//! - double-time for whatever remains, at 2×.
//!
//! A punch that crosses a threshold is split, so one punch can be billed at
//! two or three rates. Benefits ignore the bands entirely.

use rust_decimal::Decimal;

use crate::config::AccrualPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BandSegment, JobRate, ParsedPunch, PayBand, PunchAccrual};

/// Running totals for one employee's period.
///
/// Starts at zero for every employee and is only advanced by
/// [`AccrualState::accrue`], one punch at a time in chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccrualState {
    /// Cumulative hours billed so far.
    pub hours_worked: Decimal,
    /// Wages billed so far.
    pub wages: Decimal,
    /// Benefits accrued so far.
    pub benefits: Decimal,
}

impl AccrualState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one punch into the totals.
    ///
    /// # Returns
    ///
    /// A [`PunchAccrual`] recording the benefits and each band segment billed.
    /// Bands that receive no positive hours are left out, so a punch with a
    /// non-positive duration bills no wages and leaves `hours_worked`
    /// unchanged; it still accrues (negative) benefits.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` when a benefit, band amount or running total
    /// leaves the `Decimal` range. `employee` only feeds that error.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::AccrualState;
    /// use payroll_engine::config::AccrualPolicy;
    /// use payroll_engine::models::{JobRate, PayBand, TimePunch};
    /// use rust_decimal::Decimal;
    ///
    /// let job = JobRate::new("Shop - Laborer", Decimal::new(10, 0), Decimal::ZERO);
    /// let policy = AccrualPolicy::default();
    /// let mut state = AccrualState {
    ///     hours_worked: Decimal::new(38, 0),
    ///     ..AccrualState::new()
    /// };
    ///
    /// let punch = TimePunch::new("Shop - Laborer", "2022-02-23 09:00:00", "2022-02-23 13:00:00")
    ///     .parse("Anna", 5)
    ///     .unwrap();
    /// let accrual = state.accrue("Anna", &punch, &job, &policy).unwrap();
    ///
    /// assert_eq!(accrual.hours_in(PayBand::Regular), Decimal::new(2, 0));
    /// assert_eq!(accrual.hours_in(PayBand::Overtime), Decimal::new(2, 0));
    /// assert_eq!(state.wages, Decimal::new(50, 0));
    /// assert_eq!(state.hours_worked, Decimal::new(42, 0));
    /// ```
    pub fn accrue(
        &mut self,
        employee: &str,
        punch: &ParsedPunch,
        job: &JobRate,
        policy: &AccrualPolicy,
    ) -> EngineResult<PunchAccrual> {
        let overflow = || EngineError::AmountOverflow {
            employee: employee.to_string(),
            punch_index: punch.index,
        };
        let hours = punch.hours();

        let benefits = hours.checked_mul(job.benefits_rate).ok_or_else(overflow)?;
        self.benefits = self.benefits.checked_add(benefits).ok_or_else(overflow)?;

        let mut segments = Vec::with_capacity(3);
        let mut remaining = hours;

        let regular_capacity =
            (policy.regular_threshold_hours - self.hours_worked).max(Decimal::ZERO);
        let regular_hours = remaining.min(regular_capacity);
        if regular_hours > Decimal::ZERO {
            let segment = self.bill(PayBand::Regular, regular_hours, job.rate, policy);
            segments.push(segment.ok_or_else(overflow)?);
            remaining -= regular_hours;
        }

        if remaining > Decimal::ZERO {
            let overtime_capacity =
                (policy.doubletime_threshold_hours - self.hours_worked).max(Decimal::ZERO);
            let overtime_hours = remaining.min(overtime_capacity);
            if overtime_hours > Decimal::ZERO {
                let segment = self.bill(PayBand::Overtime, overtime_hours, job.rate, policy);
                segments.push(segment.ok_or_else(overflow)?);
                remaining -= overtime_hours;
            }

            if remaining > Decimal::ZERO {
                let segment = self.bill(PayBand::Doubletime, remaining, job.rate, policy);
                segments.push(segment.ok_or_else(overflow)?);
            }
        }

        Ok(PunchAccrual {
            punch_index: punch.index,
            job: job.job.clone(),
            start: punch.start,
            hours,
            benefits,
            segments,
        })
    }

    /// Bills `hours` in `band` and advances the cumulative total.
    ///
    /// Returns `None`, leaving the totals untouched, if any amount overflows.
    fn bill(
        &mut self,
        band: PayBand,
        hours: Decimal,
        base_rate: Decimal,
        policy: &AccrualPolicy,
    ) -> Option<BandSegment> {
        let multiplier = policy.multiplier(band);
        let rate = base_rate.checked_mul(multiplier)?;
        let amount = hours.checked_mul(base_rate)?.checked_mul(multiplier)?;
        let wages = self.wages.checked_add(amount)?;
        let hours_worked = self.hours_worked.checked_add(hours)?;

        self.wages = wages;
        self.hours_worked = hours_worked;

        Some(BandSegment {
            band,
            hours,
            rate,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimePunch;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn job(rate: &str, benefits_rate: &str) -> JobRate {
        JobRate::new("Shop - Laborer", dec(rate), dec(benefits_rate))
    }

    fn punch(start: &str, end: &str) -> ParsedPunch {
        TimePunch::new("Shop - Laborer", start, end).parse("Anna", 0).unwrap()
    }

    fn state_at(hours_worked: &str) -> AccrualState {
        AccrualState {
            hours_worked: dec(hours_worked),
            ..AccrualState::new()
        }
    }

    #[test]
    fn test_punch_within_regular_band() {
        let mut state = AccrualState::new();
        let accrual = state
            .accrue(
                "Anna",
                &punch("2022-02-18 09:00:00", "2022-02-18 17:00:00"),
                &job("20", "5"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        assert_eq!(accrual.segments.len(), 1);
        assert_eq!(accrual.segments[0].band, PayBand::Regular);
        assert_eq!(accrual.segments[0].rate, dec("20"));
        assert_eq!(state.hours_worked, dec("8"));
        assert_eq!(state.wages, dec("160"));
        assert_eq!(state.benefits, dec("40"));
    }

    #[test]
    fn test_punch_straddling_regular_threshold() {
        let mut state = state_at("38");
        let accrual = state
            .accrue(
                "Anna",
                &punch("2022-02-23 09:00:00", "2022-02-23 13:00:00"),
                &job("10", "0"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        assert_eq!(accrual.hours_in(PayBand::Regular), dec("2"));
        assert_eq!(accrual.hours_in(PayBand::Overtime), dec("2"));
        // 2 x 10 + 2 x 15, neither all-regular (40) nor all-overtime (60)
        assert_eq!(accrual.wages(), dec("50"));
        assert_eq!(state.hours_worked, dec("42"));
    }

    #[test]
    fn test_punch_spanning_all_three_bands() {
        let mut state = state_at("39");
        let accrual = state
            .accrue(
                "Anna",
                &punch("2022-02-23 08:00:00", "2022-02-23 19:00:00"),
                &job("10", "1"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        assert_eq!(accrual.hours_in(PayBand::Regular), dec("1"));
        assert_eq!(accrual.hours_in(PayBand::Overtime), dec("8"));
        assert_eq!(accrual.hours_in(PayBand::Doubletime), dec("2"));
        assert_eq!(accrual.wages(), dec("10") + dec("120") + dec("40"));
        assert_eq!(accrual.benefits, dec("11"));
        assert_eq!(state.hours_worked, dec("50"));
    }

    #[test]
    fn test_punch_entirely_in_doubletime() {
        let mut state = state_at("48");
        let accrual = state
            .accrue(
                "Anna",
                &punch("2022-02-24 09:00:00", "2022-02-24 12:00:00"),
                &job("10", "0"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        assert_eq!(accrual.segments.len(), 1);
        assert_eq!(accrual.segments[0].band, PayBand::Doubletime);
        assert_eq!(accrual.segments[0].rate, dec("20"));
        assert_eq!(state.wages, dec("60"));
    }

    #[test]
    fn test_fractional_hours() {
        let mut state = state_at("39.5");
        state
            .accrue(
                "Anna",
                &punch("2022-02-24 09:00:00", "2022-02-24 09:45:00"),
                &job("12", "0"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        // 0.5h regular at 12 + 0.25h overtime at 18
        assert_eq!(state.wages, dec("10.5"));
        assert_eq!(state.hours_worked, dec("40.25"));
    }

    #[test]
    fn test_negative_duration_only_touches_benefits() {
        let mut state = state_at("10");
        let accrual = state
            .accrue(
                "Anna",
                &punch("2022-02-24 12:00:00", "2022-02-24 10:00:00"),
                &job("10", "2"),
                &AccrualPolicy::default(),
            )
            .unwrap();

        assert!(accrual.segments.is_empty());
        assert_eq!(state.hours_worked, dec("10"));
        assert_eq!(state.wages, Decimal::ZERO);
        assert_eq!(state.benefits, dec("-4"));
    }

    #[test]
    fn test_custom_policy_thresholds() {
        let policy = AccrualPolicy {
            regular_threshold_hours: dec("4"),
            doubletime_threshold_hours: dec("6"),
            ..AccrualPolicy::default()
        };
        let mut state = AccrualState::new();
        state
            .accrue(
                "Anna",
                &punch("2022-02-18 09:00:00", "2022-02-18 17:00:00"),
                &job("10", "0"),
                &policy,
            )
            .unwrap();

        // 4 x 10 + 2 x 15 + 2 x 20
        assert_eq!(state.wages, dec("110"));
    }

    #[test]
    fn test_rate_beyond_decimal_range_is_an_error() {
        let mut state = AccrualState::new();
        let result = state.accrue(
            "Anna",
            &punch("2022-02-18 09:00:00", "2022-02-18 11:00:00"),
            &job("50000000000000000000000000000", "0"),
            &AccrualPolicy::default(),
        );

        assert!(matches!(
            result,
            Err(EngineError::AmountOverflow { ref employee, punch_index: 0 }) if employee == "Anna"
        ));
        assert_eq!(state.wages, Decimal::ZERO);
        assert_eq!(state.hours_worked, Decimal::ZERO);
    }

    #[test]
    fn test_benefits_beyond_decimal_range_is_an_error() {
        let mut state = AccrualState::new();
        let result = state.accrue(
            "Anna",
            &punch("2022-02-18 09:00:00", "2022-02-18 11:00:00"),
            &job("10", "50000000000000000000000000000"),
            &AccrualPolicy::default(),
        );

        assert!(matches!(result, Err(EngineError::AmountOverflow { .. })));
    }
}
