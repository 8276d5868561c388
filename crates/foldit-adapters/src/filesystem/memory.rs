//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use foldit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::FolditResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying store, so a test can hand one clone to a
/// service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Insert a file and its parent directories.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.into();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> FolditResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> FolditResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn ensure_parent(inner: &MemoryFilesystemInner, path: &Path) -> FolditResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) => {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into())
        }
        _ => Ok(()),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FolditResult<()> {
        let mut inner = self.write()?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> FolditResult<()> {
        let mut inner = self.write()?;
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        ensure_parent(&inner, path)?;
        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FolditResult<()> {
        let mut inner = self.write()?;
        ensure_parent(&inner, path)?;
        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> FolditResult<()> {
        let mut inner = self.write()?;
        ensure_parent(&inner, path)?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> FolditResult<Option<String>> {
        Ok(self.read()?.files.get(path).cloned())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_new(Path::new("/p/src/app/page.tsx"), "x").is_err());

        fs.create_dir_all(Path::new("/p/src/app")).unwrap();
        fs.create_new(Path::new("/p/src/app/page.tsx"), "x").unwrap();
        assert!(fs.exists(Path::new("/p/src")));
        assert_eq!(fs.read_file("/p/src/app/page.tsx").as_deref(), Some("x"));
    }

    #[test]
    fn create_new_conflicts_on_existing_file() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/p/Dockerfile", "FROM node");
        let err = fs.create_new(Path::new("/p/Dockerfile"), "FROM alpine").unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.add_file("/p/package.json", "{}");
        assert!(other.exists(Path::new("/p/package.json")));
        assert_eq!(other.list_files(), vec![PathBuf::from("/p/package.json")]);
    }
}
