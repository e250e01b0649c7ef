//! Workspace project discovery
//!
//! Walks the workspace root and collects project descriptor files matching
//! an include glob. Directories matching the exclude globs (build output) are
//! pruned rather than walked.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use super::ProjectReference;
use crate::config::Config;
use crate::error::{ProjectError, Result};

/// Source of candidate project files
#[async_trait]
pub trait ProjectDiscovery: Send + Sync {
    /// Return the candidate projects, at most the configured cap
    async fn discover(&self) -> Result<Vec<ProjectReference>>;
}

/// Filesystem discovery rooted at a workspace directory
#[derive(Debug, Clone)]
pub struct WorkspaceDiscovery {
    root: PathBuf,
    include: GlobSet,
    exclude: GlobSet,
    limit: usize,
}

impl WorkspaceDiscovery {
    /// Create a discovery with explicit patterns
    ///
    /// The root is canonicalized so every discovered project path is absolute.
    pub fn new(
        root: impl Into<PathBuf>,
        include: &str,
        exclude: &[String],
        limit: usize,
    ) -> Result<Self> {
        let root = root.into();
        let root = match root.canonicalize() {
            Ok(canonical) if canonical.is_dir() => canonical,
            _ => return Err(ProjectError::InvalidWorkspace(root).into()),
        };

        let mut include_builder = GlobSetBuilder::new();
        include_builder.add(compile(include)?);

        let mut exclude_builder = GlobSetBuilder::new();
        for pattern in exclude {
            exclude_builder.add(compile(pattern)?);
        }

        Ok(Self {
            root,
            include: build(include_builder, include)?,
            exclude: build(exclude_builder, &exclude.join(","))?,
            limit,
        })
    }

    /// Create a discovery from the user's configuration
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        Self::new(
            root,
            &config.project_glob,
            &config.exclude_globs,
            config.max_projects,
        )
    }

    /// Walk the workspace synchronously
    pub fn walk(&self) -> Vec<ProjectReference> {
        let mut found: Vec<ProjectReference> = self
            .entries()
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                self.relative(entry.path())
                    .is_some_and(|rel| !self.exclude.is_match(&rel) && self.include.is_match(&rel))
            })
            .inspect(|entry| debug!("Discovered project {:?}", entry.path()))
            .map(|entry| ProjectReference::new(entry.into_path()))
            .take(self.limit)
            .collect();
        found.sort();
        found
    }

    /// Entries under the root in file-name order, without descending into
    /// excluded directories
    fn entries(&self) -> impl Iterator<Item = DirEntry> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        // `**/bin/**` matches what is inside `bin`, so test as a directory prefix
        self.relative(entry.path()).is_some_and(|rel| {
            self.exclude.is_match(&rel) || self.exclude.is_match(format!("{rel}/"))
        })
    }

    /// Path relative to the root with `/` separators, as globs expect
    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}

#[async_trait]
impl ProjectDiscovery for WorkspaceDiscovery {
    #[instrument(skip(self), fields(root = ?self.root))]
    async fn discover(&self) -> Result<Vec<ProjectReference>> {
        let this = self.clone();
        let found = tokio::task::spawn_blocking(move || this.walk()).await?;
        debug!("Discovered {} project(s)", found.len());
        Ok(found)
    }
}

/// Fixed candidate list, used when the user names the project up front
#[derive(Debug, Clone, Default)]
pub struct FixedDiscovery {
    projects: Vec<ProjectReference>,
}

impl FixedDiscovery {
    pub fn new(projects: Vec<ProjectReference>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl ProjectDiscovery for FixedDiscovery {
    async fn discover(&self) -> Result<Vec<ProjectReference>> {
        Ok(self.projects.clone())
    }
}

fn compile(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| {
        ProjectError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn build(builder: GlobSetBuilder, pattern: &str) -> Result<GlobSet> {
    builder.build().map_err(|e| {
        ProjectError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
