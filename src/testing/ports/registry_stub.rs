use std::collections::{BTreeSet, HashSet};
use std::sync::Mutex;

use crate::domain::{AppError, PackageName};
use crate::ports::{NodeReleaseIndex, PackageRegistry};

/// Registry and release index double.
#[derive(Debug)]
pub struct FakeRegistry {
    pub taken: HashSet<String>,
    pub lts: BTreeSet<u64>,
    pub unreachable: bool,
    pub lookups: Mutex<Vec<String>>,
}

impl Default for FakeRegistry {
    fn default() -> Self {
        Self {
            taken: HashSet::new(),
            lts: [18, 20, 22].into_iter().collect(),
            unreachable: false,
            lookups: Mutex::new(Vec::new()),
        }
    }
}

impl FakeRegistry {
    pub fn with_taken(names: &[&str]) -> Self {
        Self { taken: names.iter().map(|s| s.to_string()).collect(), ..Self::default() }
    }

    fn unreachable_error(url: &str) -> AppError {
        AppError::Http { url: url.to_string(), details: "connection refused".to_string() }
    }
}

impl PackageRegistry for FakeRegistry {
    fn package_exists(&self, name: &PackageName) -> Result<bool, AppError> {
        self.lookups.lock().unwrap().push(name.to_string());
        if self.unreachable {
            return Err(Self::unreachable_error("https://registry.npmjs.org/"));
        }
        Ok(self.taken.contains(name.as_str()))
    }
}

impl NodeReleaseIndex for FakeRegistry {
    fn lts_majors(&self) -> Result<BTreeSet<u64>, AppError> {
        if self.unreachable {
            return Err(Self::unreachable_error("https://nodejs.org/dist/index.json"));
        }
        Ok(self.lts.clone())
    }
}
