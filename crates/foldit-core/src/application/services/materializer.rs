//! Writes rendered artifacts to disk according to their write mode.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{RelativePath, RenderedArtifact, WriteMode};
use crate::error::{FolditError, FolditResult};

/// What happened to one artifact.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A new file was written.
    Created,
    /// Content was appended or prepended to an existing file.
    Updated,
    /// The file (or its marker) was already there; nothing written.
    SkippedExists,
    /// The file to append to does not exist and may not be created.
    SkippedMissing,
    Failed(FolditError),
}

#[derive(Debug, Clone)]
pub struct MaterializationResult {
    pub path: RelativePath,
    pub outcome: Outcome,
}

impl MaterializationResult {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Resolves artifacts against a project root and writes them.
pub struct Materializer {
    filesystem: Arc<dyn Filesystem>,
    root: PathBuf,
}

impl Materializer {
    pub fn new(filesystem: Arc<dyn Filesystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            root: root.into(),
        }
    }

    /// Write one artifact. Never returns early: every failure is folded into
    /// the result so the caller decides what is fatal.
    #[instrument(skip_all, fields(path = %artifact.relative_path()))]
    pub fn materialize(&self, artifact: &RenderedArtifact) -> MaterializationResult {
        let outcome = self
            .write(artifact)
            .unwrap_or_else(|e| Outcome::Failed(self.relativize(e)));
        debug!(?outcome, "Artifact materialized");
        MaterializationResult {
            path: artifact.relative_path().clone(),
            outcome,
        }
    }

    /// Create a planned directory and its parents.
    pub fn create_dir(&self, path: &RelativePath) -> FolditResult<()> {
        self.filesystem
            .create_dir_all(&path.under(&self.root))
            .map_err(|e| self.relativize(e))
    }

    /// Errors name project-relative paths, like the progress lines do.
    fn relativize(&self, err: FolditError) -> FolditError {
        match err {
            FolditError::Application(ApplicationError::AlreadyExists { path }) => {
                ApplicationError::AlreadyExists {
                    path: self.relative(path),
                }
                .into()
            }
            FolditError::Application(ApplicationError::FilesystemError { path, reason }) => {
                ApplicationError::FilesystemError {
                    path: self.relative(path),
                    reason,
                }
                .into()
            }
            other => other,
        }
    }

    fn relative(&self, path: PathBuf) -> PathBuf {
        let stripped = path.strip_prefix(&self.root).ok().map(Path::to_path_buf);
        stripped.unwrap_or(path)
    }

    fn write(&self, artifact: &RenderedArtifact) -> FolditResult<Outcome> {
        let path = artifact.relative_path().under(&self.root);
        let content = artifact.content();

        match artifact.write_mode() {
            WriteMode::ExclusiveCreate => {
                self.ensure_parent(&path)?;
                self.filesystem.create_new(&path, content)?;
                Ok(Outcome::Created)
            }
            WriteMode::OverwriteIfAbsent => {
                if self.filesystem.exists(&path) {
                    return Ok(Outcome::SkippedExists);
                }
                self.ensure_parent(&path)?;
                match self.filesystem.create_new(&path, content) {
                    Ok(()) => Ok(Outcome::Created),
                    Err(FolditError::Application(ApplicationError::AlreadyExists { .. })) => {
                        Ok(Outcome::SkippedExists)
                    }
                    Err(e) => Err(e),
                }
            }
            WriteMode::Append {
                marker,
                create_missing,
            } => match self.filesystem.read_to_string(&path)? {
                Some(existing) if existing.contains(marker.as_str()) => Ok(Outcome::SkippedExists),
                Some(_) => {
                    self.filesystem.append(&path, &format!("\n{content}"))?;
                    Ok(Outcome::Updated)
                }
                None if *create_missing => {
                    self.ensure_parent(&path)?;
                    self.filesystem.create_new(&path, content)?;
                    Ok(Outcome::Created)
                }
                None => Ok(Outcome::SkippedMissing),
            },
            WriteMode::Prepend { marker } => match self.filesystem.read_to_string(&path)? {
                Some(existing) if existing.contains(marker.as_str()) => Ok(Outcome::SkippedExists),
                Some(existing) => {
                    self.filesystem
                        .write_file(&path, &format!("{content}\n{existing}"))?;
                    Ok(Outcome::Updated)
                }
                None => {
                    self.ensure_parent(&path)?;
                    self.filesystem.create_new(&path, content)?;
                    Ok(Outcome::Created)
                }
            },
        }
    }

    fn ensure_parent(&self, path: &Path) -> FolditResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::FakeFilesystem;

    fn artifact(path: &str, content: &str, mode: WriteMode) -> RenderedArtifact {
        RenderedArtifact::new(RelativePath::try_new(path).unwrap(), content.into(), mode)
    }

    fn setup() -> (Arc<FakeFilesystem>, Materializer) {
        let fs = Arc::new(FakeFilesystem::default());
        let materializer = Materializer::new(fs.clone(), "/work");
        (fs, materializer)
    }

    #[test]
    fn exclusive_create_writes_and_creates_parents() {
        let (fs, m) = setup();
        let result = m.materialize(&artifact(
            "src/app/about/page.tsx",
            "page",
            WriteMode::ExclusiveCreate,
        ));
        assert!(matches!(result.outcome, Outcome::Created));
        assert_eq!(fs.read("/work/src/app/about/page.tsx").as_deref(), Some("page"));
        assert!(fs.exists(Path::new("/work/src/app/about")));
    }

    #[test]
    fn exclusive_create_fails_on_existing_file() {
        let (fs, m) = setup();
        fs.seed("/work/Dockerfile", "old");
        let result = m.materialize(&artifact("Dockerfile", "new", WriteMode::ExclusiveCreate));
        match result.outcome {
            Outcome::Failed(e) => assert!(e.is_conflict()),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(fs.read("/work/Dockerfile").as_deref(), Some("old"));
    }

    #[test]
    fn overwrite_if_absent_keeps_existing_file() {
        let (fs, m) = setup();
        fs.seed("/work/src/services/axiosConfig.ts", "mine");
        let result = m.materialize(&artifact(
            "src/services/axiosConfig.ts",
            "generated",
            WriteMode::OverwriteIfAbsent,
        ));
        assert!(matches!(result.outcome, Outcome::SkippedExists));
        assert_eq!(
            fs.read("/work/src/services/axiosConfig.ts").as_deref(),
            Some("mine")
        );
    }

    #[test]
    fn append_skips_when_marker_present() {
        let (fs, m) = setup();
        fs.seed("/work/.env", "DATABASE_URL=\"x\"\n");
        let result = m.materialize(&artifact(
            ".env",
            "DATABASE_URL=\"y\"",
            WriteMode::append("DATABASE_URL"),
        ));
        assert!(matches!(result.outcome, Outcome::SkippedExists));
    }

    #[test]
    fn append_adds_newline_separated_block() {
        let (fs, m) = setup();
        fs.seed("/work/.env", "FOO=1");
        let result = m.materialize(&artifact(
            ".env",
            "DATABASE_URL=\"y\"",
            WriteMode::append("DATABASE_URL"),
        ));
        assert!(matches!(result.outcome, Outcome::Updated));
        assert_eq!(
            fs.read("/work/.env").as_deref(),
            Some("FOO=1\nDATABASE_URL=\"y\"")
        );
    }

    #[test]
    fn append_existing_skips_missing_file() {
        let (_fs, m) = setup();
        let result = m.materialize(&artifact(
            "prisma/schema.prisma",
            "model Account {}",
            WriteMode::append_existing("model Account"),
        ));
        assert!(matches!(result.outcome, Outcome::SkippedMissing));
    }

    #[test]
    fn prepend_puts_directives_first() {
        let (fs, m) = setup();
        fs.seed("/work/src/app/globals.css", "body {}");
        let result = m.materialize(&artifact(
            "src/app/globals.css",
            "@tailwind base;",
            WriteMode::prepend("@tailwind base"),
        ));
        assert!(matches!(result.outcome, Outcome::Updated));
        assert_eq!(
            fs.read("/work/src/app/globals.css").as_deref(),
            Some("@tailwind base;\nbody {}")
        );
    }
}
