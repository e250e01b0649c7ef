//! Error types for aspnet-scaffolder
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `Display` and `Error` impls.
//!
//! Only infrastructure failures live here. A missing project or a dismissed
//! prompt is not an error: flows report those as [`crate::actions::AbortReason`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for aspnet-scaffolder
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Tmux error: {0}")]
    Tmux(#[from] TmuxError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Project discovery and selection errors
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project file not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a project file: {0}")]
    NotAFile(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Workspace root is not a directory: {0}")]
    InvalidWorkspace(PathBuf),
}

/// Interactive prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal interaction failed: {0}")]
    Terminal(String),
}

impl From<dialoguer::Error> for PromptError {
    fn from(e: dialoguer::Error) -> Self {
        PromptError::Terminal(e.to_string())
    }
}

/// Tmux integration errors
#[derive(Error, Debug)]
pub enum TmuxError {
    #[error("Tmux is not installed or not in PATH")]
    NotInstalled,

    #[error("Tmux command failed: {command} - {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Tmux command timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Semaphore acquire failed")]
    SemaphoreError,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(PathBuf),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectError::NotFound(PathBuf::from("/tmp/App.csproj"));
        assert!(err.to_string().contains("/tmp/App.csproj"));

        let err = TmuxError::NotInstalled;
        assert!(err.to_string().contains("not installed"));

        let err = ProjectError::InvalidPattern {
            pattern: "**/[".to_string(),
            reason: "unclosed character class".to_string(),
        };
        assert!(err.to_string().contains("**/["));
    }

    #[test]
    fn test_error_conversion() {
        let project_err = ProjectError::NotAFile(PathBuf::from("/tmp"));
        let top_err: Error = project_err.into();
        assert!(matches!(top_err, Error::Project(_)));

        let tmux_err = TmuxError::NotInstalled;
        let top_err: Error = tmux_err.into();
        assert!(top_err.to_string().starts_with("Tmux error"));
    }
}
