//! Application state for the Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::processor::SalaryProcessor;

/// Shared application state.
///
/// Wraps the processor that owns the directory, the working-days setting and
/// the cache of the last run.
#[derive(Clone)]
pub struct AppState {
    processor: Arc<SalaryProcessor>,
}

impl AppState {
    /// Creates a new application state around `processor`.
    pub fn new(processor: SalaryProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Creates application state from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(SalaryProcessor::from_config(config))
    }

    /// Returns a reference to the processor.
    pub fn processor(&self) -> &SalaryProcessor {
        &self.processor
    }
}
