//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading payroll input,
//! accruing punches, or writing results.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, so adapters
/// (the HTTP API, the batch runner) can report failures consistently.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::MissingRequiredInput {
///     field: "jobMeta".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required input: jobMeta");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration or input file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or input file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The job-rate table or the employee table is absent from the payload.
    #[error("Missing required input: {field}")]
    MissingRequiredInput {
        /// The name of the absent field (e.g. `jobMeta`).
        field: String,
    },

    /// A punch timestamp did not match `yyyy-MM-dd HH:mm:ss`.
    #[error(
        "Malformed timestamp '{value}' in punch {punch_index} for employee '{employee}': {message}"
    )]
    MalformedTimestamp {
        /// The employee owning the punch.
        employee: String,
        /// Zero-based index of the punch in the employee's punch list.
        punch_index: usize,
        /// The offending timestamp text.
        value: String,
        /// The parser's description of the failure.
        message: String,
    },

    /// A wage or benefit amount exceeded the decimal range.
    #[error("Amount overflow in punch {punch_index} for employee '{employee}'")]
    AmountOverflow {
        /// The employee owning the punch.
        employee: String,
        /// Zero-based index of the punch in the employee's punch list.
        punch_index: usize,
    },

    /// The accrual policy has inconsistent thresholds or multipliers.
    #[error("Invalid accrual policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The result file could not be written.
    #[error("Failed to write results to '{path}': {message}")]
    OutputWriteFailed {
        /// The destination path.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
