//! Core data models for the payroll engine.
//!
//! This module contains the domain records the engine consumes and emits.

mod accrual_trace;
mod employee;
mod job_rate;
mod payroll_input;
mod payroll_result;
mod time_punch;

pub use accrual_trace::{BandSegment, EmployeeAccrual, PunchAccrual, SkippedPunch};
pub use employee::Employee;
pub use job_rate::JobRate;
pub use payroll_input::{EMPLOYEE_DATA_FIELD, JOB_META_FIELD, PayrollData, PayrollInput};
pub use payroll_result::{PayBand, PayrollResult, REPORT_DECIMAL_PLACES, to_report_precision};
pub use time_punch::{PUNCH_TIMESTAMP_FORMAT, ParsedPunch, TimePunch};
