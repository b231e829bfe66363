//! Workforce analytics over a personnel roster.
//!
//! This crate computes demographic, turnover, education and career
//! development metrics from employee records, and turns them into HR
//! strategy recommendations with an economic estimate.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
