use crate::domain::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A project-relative filesystem path.
///
/// Invariant: never absolute and never climbs out of the project through a
/// `..` component. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        Self::check(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        Self::check(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    /// The directory containing this path; empty for top-level entries.
    pub fn parent(&self) -> Self {
        Self(self.0.parent().map(Path::to_path_buf).unwrap_or_default())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against a base directory (normally the execution cwd).
    pub fn under(&self, base: &Path) -> PathBuf {
        base.join(&self.0)
    }

    fn check(path: &Path) -> Result<(), DomainError> {
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(DomainError::InvalidRouteSegment {
                segment: path.display().to_string(),
                reason: "'..' would leave the project directory".into(),
            });
        }
        Ok(())
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Uppercase the first character and leave the rest untouched.
///
/// `user-profile` becomes `User-profile`, not `UserProfile`; generated
/// identifiers keep whatever the user typed after the first letter.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("about"), "About");
        assert_eq!(capitalize("user-profile"), "User-profile");
        assert_eq!(capitalize("userProfile"), "UserProfile");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_dir_components_are_rejected() {
        let base = RelativePath::try_new("src/app").unwrap();
        assert!(base.join("../../outside").is_err());
    }

    #[test]
    fn parent_of_top_level_file_is_empty() {
        let path = RelativePath::try_new("Dockerfile").unwrap();
        assert_eq!(path.parent().as_path(), Path::new(""));
    }

    #[test]
    fn under_resolves_against_base() {
        let path = RelativePath::try_new("k8s/service.yaml").unwrap();
        assert_eq!(
            path.under(Path::new("/work")),
            PathBuf::from("/work/k8s/service.yaml")
        );
    }
}
