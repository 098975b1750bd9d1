//! Port doubles for driving the init pipeline without git or npm.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use strap::AppError;
use strap::ports::{DependencyKind, GitPort, PackageManager};
use url::Url;

/// Copies a fixture directory instead of cloning, and plants a `.git` dir
/// the pipeline is expected to remove.
pub struct FixtureGit {
    fixture: PathBuf,
    pub initialized: Mutex<Vec<PathBuf>>,
}

impl FixtureGit {
    pub fn new() -> Self {
        Self {
            fixture: Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/template"),
            initialized: Mutex::new(Vec::new()),
        }
    }
}

impl GitPort for FixtureGit {
    fn clone_shallow(&self, _url: &Url, dest: &Path) -> Result<(), AppError> {
        for entry in fs::read_dir(&self.fixture)? {
            let entry = entry?;
            fs::copy(entry.path(), dest.join(entry.file_name()))?;
        }
        fs::create_dir_all(dest.join(".git/objects"))?;
        fs::write(dest.join(".git/HEAD"), "ref: refs/heads/main\n")?;
        Ok(())
    }

    fn init_repository(&self, dir: &Path) -> Result<(), AppError> {
        self.initialized.lock().unwrap().push(dir.to_path_buf());
        Ok(())
    }
}

/// Records installs instead of running npm.
#[derive(Default)]
pub struct RecordingPackageManager {
    pub installs: Mutex<Vec<(DependencyKind, Vec<String>)>>,
    pub execs: Mutex<Vec<String>>,
}

impl PackageManager for RecordingPackageManager {
    fn install(
        &self,
        _dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        self.installs.lock().unwrap().push((kind, packages.to_vec()));
        Ok(())
    }

    fn exec(&self, _dir: &Path, args: &[&str]) -> Result<(), AppError> {
        self.execs.lock().unwrap().push(args.join(" "));
        Ok(())
    }
}
