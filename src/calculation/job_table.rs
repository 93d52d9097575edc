//! Job rate lookup.
//!
//! The job-rate table is indexed by name once, before any punches are
//! processed, so each punch resolves its rate in constant time.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::models::JobRate;

/// Job rates keyed by job name.
///
/// Names match case-sensitively. When the source table lists a job more than
/// once, the first entry wins and later ones are ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::JobRateTable;
/// use payroll_engine::models::JobRate;
/// use rust_decimal::Decimal;
///
/// let table = JobRateTable::new(&[
///     JobRate::new("Shop - Laborer", Decimal::new(20, 0), Decimal::new(5, 1)),
///     JobRate::new("Shop - Laborer", Decimal::new(99, 0), Decimal::ZERO),
/// ]);
/// assert_eq!(table.get("Shop - Laborer").unwrap().rate, Decimal::new(20, 0));
/// assert!(table.get("shop - laborer").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobRateTable {
    jobs: HashMap<String, JobRate>,
}

impl JobRateTable {
    /// Indexes the given rates by job name.
    pub fn new(job_rates: &[JobRate]) -> Self {
        let mut jobs = HashMap::with_capacity(job_rates.len());
        for job in job_rates {
            if let Entry::Vacant(slot) = jobs.entry(job.job.clone()) {
                slot.insert(job.clone());
            }
        }
        Self { jobs }
    }

    /// Looks up the rate for a job.
    pub fn get(&self, job: &str) -> Option<&JobRate> {
        self.jobs.get(job)
    }

    /// Returns the number of distinct jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true when the table has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl FromIterator<JobRate> for JobRateTable {
    fn from_iter<I: IntoIterator<Item = JobRate>>(iter: I) -> Self {
        let rates: Vec<JobRate> = iter.into_iter().collect();
        Self::new(&rates)
    }
}
