use crate::domain::RelativePath;

/// How rendered content lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file; an existing file is a conflict.
    ExclusiveCreate,
    /// Create the file only when absent; an existing file is left alone.
    OverwriteIfAbsent,
    /// Append after a newline unless the file already contains `marker`.
    /// A missing file is created when `create_missing` is set and skipped
    /// otherwise.
    Append {
        marker: String,
        create_missing: bool,
    },
    /// Put content in front of the existing text unless it already contains
    /// `marker`. A missing file is created.
    Prepend { marker: String },
}

impl WriteMode {
    pub fn append(marker: impl Into<String>) -> Self {
        Self::Append {
            marker: marker.into(),
            create_missing: true,
        }
    }

    pub fn append_existing(marker: impl Into<String>) -> Self {
        Self::Append {
            marker: marker.into(),
            create_missing: false,
        }
    }

    pub fn prepend(marker: impl Into<String>) -> Self {
        Self::Prepend {
            marker: marker.into(),
        }
    }

    /// Marker that suppresses the write when already present.
    pub fn marker(&self) -> Option<&str> {
        match self {
            Self::Append { marker, .. } | Self::Prepend { marker } => Some(marker),
            Self::ExclusiveCreate | Self::OverwriteIfAbsent => None,
        }
    }
}

/// Rendered file content bound to its destination. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    relative_path: RelativePath,
    content: String,
    write_mode: WriteMode,
}

impl RenderedArtifact {
    pub fn new(relative_path: RelativePath, content: String, write_mode: WriteMode) -> Self {
        Self {
            relative_path,
            content,
            write_mode,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn write_mode(&self) -> &WriteMode {
        &self.write_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_exposed_for_guarded_modes() {
        assert_eq!(WriteMode::append("DATABASE_URL").marker(), Some("DATABASE_URL"));
        assert_eq!(WriteMode::prepend("@tailwind base").marker(), Some("@tailwind base"));
        assert_eq!(WriteMode::ExclusiveCreate.marker(), None);
    }

    #[test]
    fn append_existing_does_not_create() {
        assert_eq!(
            WriteMode::append_existing("model Account"),
            WriteMode::Append {
                marker: "model Account".into(),
                create_missing: false
            }
        );
    }
}
