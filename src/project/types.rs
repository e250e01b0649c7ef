//! Project descriptor references

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ProjectError, Result};

/// A discovered project descriptor file (`.csproj`)
///
/// Created fresh for every action and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectReference {
    path: PathBuf,
}

impl ProjectReference {
    /// Wrap an already-absolute path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a reference from a user-supplied path, which must name an existing file
    pub fn from_user_path(path: &Path) -> Result<Self> {
        let canonical = path
            .canonicalize()
            .map_err(|_| ProjectError::NotFound(path.to_path_buf()))?;

        if !canonical.is_file() {
            return Err(ProjectError::NotAFile(canonical).into());
        }

        Ok(Self { path: canonical })
    }

    /// Full path to the descriptor file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown in pick lists
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Directory commands for this project run in
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl fmt::Display for ProjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
