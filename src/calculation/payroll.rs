//! Payroll calculation across employees.
//!
//! Each employee is computed independently: parse and sort their punches,
//! fold them through a fresh [`AccrualState`], then report the band split of
//! the final total. Nothing carries over between employees.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::{Employee, EmployeeAccrual, PayrollData, PayrollResult, SkippedPunch};

use super::{AccrualState, JobRateTable, split_total_hours};

/// Payroll results keyed by employee name.
pub type PayrollResults = BTreeMap<String, PayrollResult>;

/// Accrues one employee's punches and returns the full trace.
///
/// Punches whose job is missing from `jobs` are skipped: they add no hours,
/// wages or benefits and do not move the cumulative total for later punches.
///
/// # Errors
///
/// Returns `MalformedTimestamp` for the first punch whose start or end cannot
/// be parsed. Every punch is parsed, including ones with unknown jobs.
/// Returns `AmountOverflow` if an amount leaves the `Decimal` range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{JobRateTable, calculate_employee_accrual};
/// use payroll_engine::config::AccrualPolicy;
/// use payroll_engine::models::{Employee, JobRate, TimePunch};
/// use rust_decimal::Decimal;
///
/// let jobs = JobRateTable::new(&[JobRate::new("Hospital - Painter", Decimal::new(20, 0), Decimal::new(5, 0))]);
/// let employee = Employee::new(
///     "Mike",
///     vec![
///         TimePunch::new("Hospital - Painter", "2022-02-18 09:00:00", "2022-02-18 17:00:00"),
///         TimePunch::new("Retired Job", "2022-02-19 09:00:00", "2022-02-19 17:00:00"),
///     ],
/// );
///
/// let accrual = calculate_employee_accrual(&employee, &jobs, &AccrualPolicy::default()).unwrap();
/// assert_eq!(accrual.punches.len(), 1);
/// assert_eq!(accrual.skipped[0].job, "Retired Job");
/// assert_eq!(accrual.result.wage_total.to_string(), "160.0000");
/// ```
pub fn calculate_employee_accrual(
    employee: &Employee,
    jobs: &JobRateTable,
    policy: &AccrualPolicy,
) -> EngineResult<EmployeeAccrual> {
    let punches = employee.chronological_punches()?;

    let mut state = AccrualState::new();
    let mut accrued = Vec::with_capacity(punches.len());
    let mut skipped = Vec::new();

    for punch in &punches {
        match jobs.get(&punch.job) {
            Some(job) => accrued.push(state.accrue(&employee.name, punch, job, policy)?),
            None => {
                debug!(
                    employee = %employee.name,
                    punch_index = punch.index,
                    job = %punch.job,
                    "Skipping punch with unknown job"
                );
                skipped.push(SkippedPunch {
                    punch_index: punch.index,
                    job: punch.job.clone(),
                });
            }
        }
    }

    let split = split_total_hours(state.hours_worked, policy);
    let result = PayrollResult::new(
        employee.name.clone(),
        split.regular,
        split.overtime,
        split.doubletime,
        state.wages,
        state.benefits,
    );

    debug!(
        employee = %employee.name,
        punches = accrued.len(),
        skipped = skipped.len(),
        hours_worked = %state.hours_worked,
        wage_total = %result.wage_total,
        "Employee accrual completed"
    );

    Ok(EmployeeAccrual {
        punches: accrued,
        skipped,
        hours_worked: state.hours_worked,
        wages: state.wages,
        benefits: state.benefits,
        result,
    })
}

/// Computes payroll results for every employee.
///
/// When two employees share a name, the later one's result replaces the
/// earlier one's.
///
/// # Errors
///
/// Any malformed timestamp or amount overflow fails the whole run; no partial
/// results are returned.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{JobRateTable, calculate_payroll};
/// use payroll_engine::config::AccrualPolicy;
/// use payroll_engine::models::{Employee, JobRate, TimePunch};
/// use rust_decimal::Decimal;
///
/// let jobs = JobRateTable::new(&[JobRate::new("Shop - Laborer", Decimal::new(10, 0), Decimal::ZERO)]);
/// let punches = (14..19)
///     .map(|day| {
///         TimePunch::new(
///             "Shop - Laborer",
///             format!("2022-02-{day} 08:00:00"),
///             format!("2022-02-{day} 17:00:00"),
///         )
///     })
///     .collect();
///
/// let results = calculate_payroll(&jobs, &[Employee::new("Anna", punches)], &AccrualPolicy::default()).unwrap();
/// let anna = &results["Anna"];
/// assert_eq!(anna.regular.to_string(), "40.0000");
/// assert_eq!(anna.overtime.to_string(), "5.0000");
/// assert_eq!(anna.wage_total.to_string(), "475.0000");
/// ```
pub fn calculate_payroll(
    jobs: &JobRateTable,
    employees: &[Employee],
    policy: &AccrualPolicy,
) -> EngineResult<PayrollResults> {
    let mut results = PayrollResults::new();

    for employee in employees {
        let accrual = calculate_employee_accrual(employee, jobs, policy)?;
        results.insert(employee.name.clone(), accrual.result);
    }

    Ok(results)
}

/// Computes payroll results for a validated payload.
pub fn calculate_payroll_data(
    data: &PayrollData,
    policy: &AccrualPolicy,
) -> EngineResult<PayrollResults> {
    let jobs = JobRateTable::new(&data.job_meta);
    calculate_payroll(&jobs, &data.employee_data, policy)
}
