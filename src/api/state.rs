//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AccrualPolicy;

/// Shared application state.
///
/// Holds the accrual policy every request is computed under.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<AccrualPolicy>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: AccrualPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AccrualPolicy::default())
    }
}
