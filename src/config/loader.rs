//! Configuration and input loading.
//!
//! This module provides the [`ConfigLoader`] type for reading payroll
//! payloads and accrual policies from disk.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollData, PayrollInput};

use super::types::AccrualPolicy;

/// Policy file picked up when no policy path is given.
pub const DEFAULT_POLICY_PATH: &str = "config/policy.yaml";

/// Loads payroll input and accrual policy files.
///
/// Payroll files are read as YAML when the extension is `.yaml` or `.yml`
/// and as JSON otherwise. Policy files are always YAML.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let data = ConfigLoader::load_payroll("clean_data.json")?;
/// let policy = ConfigLoader::load_policy("config/policy.yaml")?;
/// println!("{} employees, overtime after {}h", data.employee_data.len(), policy.regular_threshold_hours);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a payroll payload.
    ///
    /// # Returns
    ///
    /// The validated [`PayrollData`], or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid JSON/YAML of the expected shape (`ConfigParseError`)
    /// - `jobMeta` or `employeeData` is absent (`MissingRequiredInput`)
    pub fn load_payroll<P: AsRef<Path>>(path: P) -> EngineResult<PayrollData> {
        let path = path.as_ref();

        let input: PayrollInput = if is_yaml(path) {
            Self::load_yaml(path)?
        } else {
            Self::load_json(path)?
        };

        input.validate()
    }

    /// Loads and validates an accrual policy YAML file.
    pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<AccrualPolicy> {
        let policy = Self::load_yaml::<AccrualPolicy>(path.as_ref())?;
        policy.validate()?;
        Ok(policy)
    }

    /// Resolves the policy for a run.
    ///
    /// An explicit `path` must load. Without one, `fallback` is loaded when it
    /// exists and the built-in defaults apply otherwise.
    pub fn resolve_policy<P: AsRef<Path>>(
        path: Option<&Path>,
        fallback: P,
    ) -> EngineResult<AccrualPolicy> {
        match path {
            Some(path) => Self::load_policy(path),
            None if fallback.as_ref().is_file() => Self::load_policy(fallback),
            None => Ok(AccrualPolicy::default()),
        }
    }

    fn read(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let content = Self::read(path)?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let content = Self::read(path)?;

        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml")
}
