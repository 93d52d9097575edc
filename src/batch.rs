//! File-to-file payroll runs.
//!
//! Reads a payroll payload, computes every employee, and writes the result
//! mapping as pretty-printed JSON. The output file is only written once the
//! whole run has succeeded.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::calculation::{PayrollResults, calculate_payroll_data};
use crate::config::{AccrualPolicy, ConfigLoader};
use crate::error::{EngineError, EngineResult};

/// Default input file name.
pub const DEFAULT_INPUT_PATH: &str = "clean_data.json";

/// Default output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "payroll_results.json";

/// Runs payroll from `input` and writes the results to `output`.
///
/// # Errors
///
/// Any loading, validation or timestamp error is returned before `output`
/// is touched, so a failed run never leaves a partial result file behind.
/// A failed write is reported as `OutputWriteFailed`.
pub fn run_batch(
    input: &Path,
    output: &Path,
    policy: &AccrualPolicy,
) -> EngineResult<PayrollResults> {
    let outcome = ConfigLoader::load_payroll(input)
        .and_then(|data| calculate_payroll_data(&data, policy));

    let results = match outcome {
        Ok(results) => results,
        Err(err) => {
            warn!(input = %input.display(), error = %err, "Payroll run failed");
            return Err(err);
        }
    };

    write_results(output, &results)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        employees = results.len(),
        "Payroll run completed"
    );
    Ok(results)
}

/// Serializes results as pretty-printed JSON into `path`.
pub fn write_results(path: &Path, results: &PayrollResults) -> EngineResult<()> {
    let to_write_error = |message: String| EngineError::OutputWriteFailed {
        path: path.display().to_string(),
        message,
    };

    let json = serde_json::to_string_pretty(results).map_err(|e| to_write_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_write_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PAYROLL_JSON: &str = r#"{
        "jobMeta": [{"job": "Hospital - Painter", "rate": 20, "benefitsRate": 5}],
        "employeeData": [{
            "employee": "Mike",
            "timePunch": [
                {"job": "Hospital - Painter", "start": "2022-02-18 09:00:00", "end": "2022-02-18 17:00:00"}
            ]
        }]
    }"#;

    #[test]
    fn test_run_writes_result_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join(DEFAULT_INPUT_PATH);
        let output = dir.path().join(DEFAULT_OUTPUT_PATH);
        fs::write(&input, PAYROLL_JSON).unwrap();

        let results = run_batch(&input, &output, &AccrualPolicy::default()).unwrap();
        assert_eq!(results.len(), 1);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["Mike"]["employee"], "Mike");
        assert_eq!(written["Mike"]["regular"], "8.0000");
        assert_eq!(written["Mike"]["wageTotal"], "160.0000");
        assert_eq!(written["Mike"]["benefitTotal"], "40.0000");
    }

    #[test]
    fn test_failed_run_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join(DEFAULT_INPUT_PATH);
        let output = dir.path().join(DEFAULT_OUTPUT_PATH);
        fs::write(&input, PAYROLL_JSON.replace("2022-02-18 17:00:00", "5pm")).unwrap();

        let err = run_batch(&input, &output, &AccrualPolicy::default()).unwrap_err();

        assert!(matches!(err, EngineError::MalformedTimestamp { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join(DEFAULT_OUTPUT_PATH);

        let err = run_batch(
            &dir.path().join("absent.json"),
            &output,
            &AccrualPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_reported() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join(DEFAULT_INPUT_PATH);
        fs::write(&input, PAYROLL_JSON).unwrap();
        let output = dir.path().join("missing_dir").join(DEFAULT_OUTPUT_PATH);

        let err = run_batch(&input, &output, &AccrualPolicy::default()).unwrap_err();
        assert!(matches!(err, EngineError::OutputWriteFailed { .. }));
    }
}
