//! Employee model.
//!
//! An employee is identified by name and owns the punches recorded for
//! the pay period, in the order they were recorded.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{ParsedPunch, TimePunch};

/// An employee and their recorded punches.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
///
/// let employee: Employee = serde_json::from_str(
///     r#"{"employee": "Mike", "timePunch": [
///         {"job": "Hospital - Painter", "start": "2022-02-18 09:00:00", "end": "2022-02-18 17:00:00"}
///     ]}"#,
/// )
/// .unwrap();
/// assert_eq!(employee.name, "Mike");
/// assert_eq!(employee.time_punches.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name; keys the payroll result.
    #[serde(rename = "employee")]
    pub name: String,
    /// Punches in recorded order, not necessarily chronological.
    #[serde(rename = "timePunch", default)]
    pub time_punches: Vec<TimePunch>,
}

impl Employee {
    /// Creates an employee with the given punches.
    pub fn new(name: impl Into<String>, time_punches: Vec<TimePunch>) -> Self {
        Self {
            name: name.into(),
            time_punches,
        }
    }

    /// Parses every punch and returns them sorted by start time.
    ///
    /// The sort is stable, so punches with equal starts keep their recorded
    /// order. All punches are parsed, whatever their job, and the first
    /// malformed timestamp fails the whole list.
    pub fn chronological_punches(&self) -> EngineResult<Vec<ParsedPunch>> {
        let mut punches = self
            .time_punches
            .iter()
            .enumerate()
            .map(|(index, punch)| punch.parse(&self.name, index))
            .collect::<EngineResult<Vec<_>>>()?;

        punches.sort_by_key(|p| p.start);
        Ok(punches)
    }
}
