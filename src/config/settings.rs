//! User configuration settings
//!
//! Layered configuration: defaults → config file → environment variables → CLI args

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};

/// Environment variable prefix (e.g. `ASPNET_SCAFFOLDER_SESSION_NAME`)
pub const ENV_PREFIX: &str = "ASPNET_SCAFFOLDER_";

/// Identity pages offered by the identity file picker
pub const DEFAULT_IDENTITY_FILES: &[&str] = &[
    "Login",
    "Register",
    "Logout",
    "ForgotPassword",
    "ResetPassword",
    "Manage/Index",
    "Manage/Email",
    "Manage/TwoFactorAuthentication",
];

/// How a finished command line reaches a shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Type `cd` and the command into a reusable named tmux session
    #[default]
    Session,
    /// Spawn the command directly with its working directory set at spawn time
    Direct,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the reusable tmux session commands are sent to
    pub session_name: String,

    /// Glob matching project descriptor files, relative to the workspace root
    pub project_glob: String,

    /// Globs for directories that never contain candidate projects
    pub exclude_globs: Vec<String>,

    /// Upper bound on discovered project files
    pub max_projects: usize,

    /// Pre-filled DbContext name for scaffolding prompts
    pub default_db_context: String,

    /// Identity pages offered by `identity-select`
    pub identity_files: Vec<String>,

    /// Where commands are executed
    pub dispatch_mode: DispatchMode,

    /// Attach the current terminal to the session after dispatching
    /// (only when not already running inside tmux)
    pub attach: bool,

    /// Maximum concurrent tmux commands
    pub max_concurrent_tmux: usize,

    /// Shell used by direct dispatch
    pub shell_program: String,

    /// Enable debug logging
    pub debug: bool,

    /// Log file path (if set, logs to file instead of stderr)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_name: "aspnet-ef".to_string(),
            project_glob: "**/*.csproj".to_string(),
            exclude_globs: vec!["**/bin/**".to_string()],
            max_projects: 50,
            default_db_context: "ApplicationDbContext".to_string(),
            identity_files: DEFAULT_IDENTITY_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dispatch_mode: DispatchMode::Session,
            attach: false,
            max_concurrent_tmux: 4,
            shell_program: std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string()),
            debug: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration with an explicit config file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Layer config file if it exists
            .merge(Toml::file(config_path))
            // Layer environment variables (ASPNET_SCAFFOLDER_SESSION_NAME, etc.)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every action a no-op
    pub fn validate(&self) -> Result<()> {
        if self.session_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "session_name".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.max_projects == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_projects".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.max_concurrent_tmux == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_concurrent_tmux".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|_e| {
                Error::Config(ConfigError::DirectoryCreationFailed(parent.to_path_buf()))
            })?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        std::fs::write(config_path, toml).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "aspnet-scaffolder", "aspnet-scaffolder").ok_or_else(|| {
            Error::Config(ConfigError::LoadFailed(
                "Could not determine home directory".to_string(),
            ))
        })
    }
}
