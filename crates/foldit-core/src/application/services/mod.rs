//! Application services - orchestrate use cases.

pub mod manifest;
pub mod materializer;
pub mod scaffold_service;

pub use materializer::{MaterializationResult, Materializer, Outcome};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};

/// In-crate fakes shared by the service tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{BTreeMap, BTreeSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::application::ApplicationError;
    use crate::application::ports::{Filesystem, Reporter};
    use crate::error::FolditResult;

    #[derive(Default)]
    pub struct FakeFilesystem {
        files: Mutex<BTreeMap<PathBuf, String>>,
        dirs: Mutex<BTreeSet<PathBuf>>,
    }

    impl FakeFilesystem {
        pub fn seed(&self, path: impl Into<PathBuf>, content: &str) {
            self.files.lock().unwrap().insert(path.into(), content.into());
        }

        pub fn seed_dir(&self, path: impl Into<PathBuf>) {
            self.dirs.lock().unwrap().insert(path.into());
        }

        pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.lock().unwrap().get(path.as_ref()).cloned()
        }

        pub fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Filesystem for FakeFilesystem {
        fn create_dir_all(&self, path: &Path) -> FolditResult<()> {
            let mut dirs = self.dirs.lock().unwrap();
            for ancestor in path.ancestors() {
                dirs.insert(ancestor.to_path_buf());
            }
            Ok(())
        }

        fn create_new(&self, path: &Path, content: &str) -> FolditResult<()> {
            let mut files = self.files.lock().unwrap();
            if files.contains_key(path) {
                return Err(ApplicationError::AlreadyExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            files.insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> FolditResult<()> {
            self.seed(path, content);
            Ok(())
        }

        fn append(&self, path: &Path, content: &str) -> FolditResult<()> {
            self.files
                .lock()
                .unwrap()
                .entry(path.to_path_buf())
                .or_default()
                .push_str(content);
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> FolditResult<Option<String>> {
            Ok(self.read(path))
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
        }
    }

    /// Keeps every reported line, prefixed with its level.
    #[derive(Clone, Default)]
    pub struct RecordingReporter {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingReporter {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines().iter().any(|l| l.contains(needle))
        }

        fn push(&self, line: String) {
            self.lines.lock().unwrap().push(line);
        }
    }

    impl Reporter for RecordingReporter {
        fn success(&self, message: &str) {
            self.push(format!("success: {message}"));
        }

        fn info(&self, message: &str) {
            self.push(format!("info: {message}"));
        }

        fn warning(&self, message: &str) {
            self.push(format!("warning: {message}"));
        }

        fn note(&self, heading: &str, body: &str) {
            self.push(format!("note: {heading}\n{body}"));
        }
    }
}
