//! Job rate model.
//!
//! A job rate pairs a job name with its base hourly wage and the flat
//! per-hour benefits accrual for that job.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay rates for a single job.
///
/// # Example
///
/// ```
/// use payroll_engine::models::JobRate;
/// use rust_decimal::Decimal;
///
/// let job: JobRate = serde_json::from_str(
///     r#"{"job": "Hospital - Painter", "rate": 31.25, "benefitsRate": 1}"#,
/// )
/// .unwrap();
/// assert_eq!(job.job, "Hospital - Painter");
/// assert_eq!(job.rate, Decimal::new(3125, 2));
/// assert_eq!(job.benefits_rate, Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRate {
    /// The job name punches refer to. Matched case-sensitively.
    pub job: String,
    /// The base hourly wage rate.
    pub rate: Decimal,
    /// Benefits accrued per hour worked, independent of overtime.
    #[serde(rename = "benefitsRate")]
    pub benefits_rate: Decimal,
}

impl JobRate {
    /// Creates a job rate.
    pub fn new(job: impl Into<String>, rate: Decimal, benefits_rate: Decimal) -> Self {
        Self {
            job: job.into(),
            rate,
            benefits_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserializes_string_and_numeric_rates() {
        let job: JobRate =
            serde_json::from_str(r#"{"job": "Shop - Laborer", "rate": "20.0", "benefitsRate": 0.5}"#)
                .unwrap();

        assert_eq!(job.rate, dec("20.0"));
        assert_eq!(job.benefits_rate, dec("0.5"));
    }

    #[test]
    fn test_serializes_benefits_rate_in_camel_case() {
        let job = JobRate::new("Hospital - Painter", dec("31.25"), dec("1.00"));
        let json = serde_json::to_string(&job).unwrap();

        assert!(json.contains("\"benefitsRate\""));
        assert!(!json.contains("benefits_rate"));
    }

    #[test]
    fn test_missing_rate_is_rejected() {
        let result = serde_json::from_str::<JobRate>(r#"{"job": "Shop - Laborer"}"#);
        assert!(result.is_err());
    }
}
