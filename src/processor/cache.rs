//! Cache of the most recent processing run.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::SalaryResult;

/// Holds the results of the last completed run, keyed by employee identifier.
///
/// A run publishes its results as one generation; readers see either the
/// previous generation or the new one, never a mix.
#[derive(Debug, Default)]
pub struct ResultCache {
    generation: RwLock<Arc<HashMap<String, SalaryResult>>>,
}

impl ResultCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached generation with `results`.
    pub fn replace(&self, results: &[SalaryResult]) {
        let next: HashMap<String, SalaryResult> = results
            .iter()
            .map(|r| (r.employee_id.clone(), r.clone()))
            .collect();
        let mut guard = self
            .generation
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(next);
    }

    /// Returns the current generation.
    pub fn snapshot(&self) -> Arc<HashMap<String, SalaryResult>> {
        let guard = self
            .generation
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Returns the cached result for `employee_id`, if the last run produced one.
    pub fn get(&self, employee_id: &str) -> Option<SalaryResult> {
        self.snapshot().get(employee_id).cloned()
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// True when no run has produced results yet, or the last run produced none.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
