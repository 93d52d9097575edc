//! Calculation logic for the payroll engine.
//!
//! This module contains the job-rate lookup, the per-punch accrual fold that
//! prices hours across the regular, overtime and double-time bands, the band
//! split reported from an employee's total hours, and the payroll run over
//! all employees.

mod accrual;
mod band_split;
mod job_table;
mod payroll;

pub use accrual::AccrualState;
pub use band_split::{BandBreakdown, split_total_hours};
pub use job_table::JobRateTable;
pub use payroll::{
    PayrollResults, calculate_employee_accrual, calculate_payroll, calculate_payroll_data,
};
