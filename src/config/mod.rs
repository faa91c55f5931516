//! Configuration loading and management for the Salary Engine.
//!
//! This module loads processing settings and the employee directory from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary").unwrap();
//! println!("Employees: {}", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeesConfig, ProcessingSettings, SalaryConfig};
