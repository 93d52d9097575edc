//! Configuration and input loading for the payroll engine.
//!
//! This module provides the accrual policy (overtime thresholds and
//! multipliers) and the loader for payroll payload and policy files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let policy = ConfigLoader::load_policy("./config/policy.yaml").unwrap();
//! println!("Double-time after {} hours", policy.doubletime_threshold_hours);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_POLICY_PATH};
pub use types::{
    AccrualPolicy, DEFAULT_DOUBLETIME_MULTIPLIER, DEFAULT_DOUBLETIME_THRESHOLD_HOURS,
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_REGULAR_THRESHOLD_HOURS,
};
