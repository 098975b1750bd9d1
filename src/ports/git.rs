use std::path::Path;

use url::Url;

use crate::domain::AppError;

pub trait GitPort {
    /// Clone the tip of `url` into the existing, empty directory `dest`.
    fn clone_shallow(&self, url: &Url, dest: &Path) -> Result<(), AppError>;

    /// Create an empty repository at `dir`.
    fn init_repository(&self, dir: &Path) -> Result<(), AppError>;
}

impl<T: GitPort + ?Sized> GitPort for &T {
    fn clone_shallow(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        (**self).clone_shallow(url, dest)
    }

    fn init_repository(&self, dir: &Path) -> Result<(), AppError> {
        (**self).init_repository(dir)
    }
}
