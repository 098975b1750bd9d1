//! Ordered record of side effects shared between test doubles.

use std::sync::{Arc, Mutex};

/// Shared, cloneable call log.
///
/// Hand the same journal to several doubles to assert on the relative order
/// of their calls.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}
