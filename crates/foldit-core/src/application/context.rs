//! Per-invocation execution context.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::PackageManager;

/// Everything a command reads from its environment, captured once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    cwd: PathBuf,
    package_manager: PackageManager,
    auto_install: bool,
}

impl ExecutionContext {
    pub fn new(cwd: impl Into<PathBuf>, package_manager: PackageManager) -> Self {
        Self {
            cwd: cwd.into(),
            package_manager,
            auto_install: true,
        }
    }

    /// Capture `cwd` and pick the package manager from its lock file:
    /// `pnpm-lock.yaml` wins over `yarn.lock`, npm otherwise.
    pub fn detect(cwd: impl Into<PathBuf>, fs: &dyn Filesystem) -> Self {
        let cwd = cwd.into();
        let package_manager = [PackageManager::Pnpm, PackageManager::Yarn]
            .into_iter()
            .find(|pm| pm.lock_file().is_some_and(|lock| fs.exists(&cwd.join(lock))))
            .unwrap_or_default();
        debug!(cwd = %cwd.display(), %package_manager, "Execution context detected");
        Self::new(cwd, package_manager)
    }

    /// Force a package manager regardless of lock files.
    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    /// When false, installs are skipped and the manual command is printed.
    pub fn with_auto_install(mut self, auto_install: bool) -> Self {
        self.auto_install = auto_install;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn auto_install(&self) -> bool {
        self.auto_install
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn fs_with(lock: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |path| path.ends_with(lock));
        fs
    }

    #[test]
    fn pnpm_lock_selects_pnpm() {
        let ctx = ExecutionContext::detect("/work", &fs_with("pnpm-lock.yaml"));
        assert_eq!(ctx.package_manager(), PackageManager::Pnpm);
        assert_eq!(ctx.cwd(), Path::new("/work"));
    }

    #[test]
    fn yarn_lock_selects_yarn() {
        let ctx = ExecutionContext::detect("/work", &fs_with("yarn.lock"));
        assert_eq!(ctx.package_manager(), PackageManager::Yarn);
    }

    #[test]
    fn no_lock_file_falls_back_to_npm() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let ctx = ExecutionContext::detect("/work", &fs);
        assert_eq!(ctx.package_manager(), PackageManager::Npm);
        assert!(ctx.auto_install());
    }

    #[test]
    fn overrides_apply() {
        let ctx = ExecutionContext::new("/work", PackageManager::Npm)
            .with_package_manager(PackageManager::Yarn)
            .with_auto_install(false);
        assert_eq!(ctx.package_manager(), PackageManager::Yarn);
        assert!(!ctx.auto_install());
    }
}
