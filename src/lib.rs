//! Salary Engine for attendance-based payroll
//!
//! This crate extracts per-employee attendance summaries from spreadsheet
//! exports and computes final payable salaries from them: an attendance
//! coefficient scaled against the monthly salary, less a tiered late-mark
//! penalty. An axum API exposes processing, settings and cached results.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod directory;
pub mod error;
pub mod extraction;
pub mod models;
pub mod processor;
