//! Payroll input payload.
//!
//! [`PayrollInput`] mirrors the payload as it arrives, with both tables
//! optional; [`PayrollData`] is the validated form the engine consumes.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Employee, JobRate};

/// Wire name of the job-rate table.
pub const JOB_META_FIELD: &str = "jobMeta";
/// Wire name of the employee-punch table.
pub const EMPLOYEE_DATA_FIELD: &str = "employeeData";

/// The payroll payload as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The job-rate table.
    #[serde(rename = "jobMeta", default)]
    pub job_meta: Option<Vec<JobRate>>,
    /// The employee-punch table.
    #[serde(rename = "employeeData", default)]
    pub employee_data: Option<Vec<Employee>>,
}

impl PayrollInput {
    /// Checks that both tables are present.
    ///
    /// Either table may be empty; an absent or `null` table is a
    /// `MissingRequiredInput` error.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollInput;
    ///
    /// let input: PayrollInput = serde_json::from_str(r#"{"jobMeta": []}"#).unwrap();
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(self) -> EngineResult<PayrollData> {
        let job_meta = self.job_meta.ok_or_else(|| EngineError::MissingRequiredInput {
            field: JOB_META_FIELD.to_string(),
        })?;
        let employee_data = self
            .employee_data
            .ok_or_else(|| EngineError::MissingRequiredInput {
                field: EMPLOYEE_DATA_FIELD.to_string(),
            })?;

        Ok(PayrollData {
            job_meta,
            employee_data,
        })
    }
}

/// A payroll payload with both tables present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollData {
    /// The job-rate table, in file order.
    #[serde(rename = "jobMeta")]
    pub job_meta: Vec<JobRate>,
    /// The employees and their punches.
    #[serde(rename = "employeeData")]
    pub employee_data: Vec<Employee>,
}
