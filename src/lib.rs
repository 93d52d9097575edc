//! Payroll accrual engine.
//!
//! This crate computes regular, overtime and double-time hours, wages and
//! benefits for employees from their time punches and a table of per-job
//! rates. Weekly thresholds (40h regular, 48h overtime) apply cumulatively
//! across every punch in chronological order, whatever the job.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
