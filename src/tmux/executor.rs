//! Async tmux command executor with semaphore-controlled concurrency
//!
//! Provides non-blocking tmux command execution with:
//! - Semaphore to limit concurrent commands
//! - Timeout handling
//! - Literal key sending, so command text is never parsed as key names

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result, TmuxError};

/// Default maximum concurrent tmux commands
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Default command timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Async tmux command executor
#[derive(Clone)]
pub struct TmuxExecutor {
    /// Semaphore for concurrency control
    semaphore: Arc<Semaphore>,
    /// Command timeout
    timeout: Duration,
}

impl TmuxExecutor {
    /// Create a new executor with default settings
    pub fn new() -> Self {
        Self::with_max_concurrent(DEFAULT_MAX_CONCURRENT)
    }

    /// Create an executor with custom concurrency limit
    pub fn with_max_concurrent(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Check if tmux is installed and accessible
    pub async fn check_installed(&self) -> Result<()> {
        let output = Command::new("tmux")
            .arg("-V")
            .output()
            .await
            .map_err(|_| TmuxError::NotInstalled)?;

        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout);
            debug!("tmux version: {}", version.trim());
            Ok(())
        } else {
            Err(TmuxError::NotInstalled.into())
        }
    }

    /// Execute a tmux command and return its output
    #[instrument(skip(self), fields(args = ?args))]
    pub async fn execute(&self, args: &[&str]) -> Result<String> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TmuxError::SemaphoreError)?;

        let mut cmd = Command::new("tmux");
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        match timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
                    Err(TmuxError::CommandFailed {
                        command: format!("tmux {}", args.join(" ")),
                        stderr,
                    }
                    .into())
                }
            }
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TmuxError::NotInstalled.into())
            }
            Ok(Err(e)) => {
                warn!("tmux command failed: {}", e);
                Err(TmuxError::CommandFailed {
                    command: format!("tmux {}", args.join(" ")),
                    stderr: e.to_string(),
                }
                .into())
            }
            Err(_) => Err(TmuxError::Timeout(self.timeout).into()),
        }
    }

    /// Check if a tmux session exists
    pub async fn session_exists(&self, session_name: &str) -> Result<bool> {
        let target = session_target(session_name);
        match self.execute(&["has-session", "-t", &target]).await {
            Ok(_) => Ok(true),
            // "has-session" returns non-zero if the session (or the server) is absent
            Err(Error::Tmux(TmuxError::CommandFailed { .. })) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Create a detached tmux session running the user's default shell
    pub async fn create_session(&self, session_name: &str, working_dir: Option<&Path>) -> Result<()> {
        let dir = working_dir.map(|d| d.to_string_lossy().into_owned());

        let mut args = vec!["new-session", "-d", "-s", session_name];
        if let Some(dir) = &dir {
            args.push("-c");
            args.push(dir);
        }

        self.execute(&args).await?;
        Ok(())
    }

    /// Kill a tmux session
    pub async fn kill_session(&self, session_name: &str) -> Result<()> {
        let target = session_target(session_name);
        self.execute(&["kill-session", "-t", &target]).await?;
        Ok(())
    }

    /// Type text into a session verbatim, without pressing Enter
    pub async fn send_literal(&self, session_name: &str, text: &str) -> Result<()> {
        let target = pane_target(session_name);
        self.execute(&["send-keys", "-t", &target, "-l", text])
            .await?;
        Ok(())
    }

    /// Send a named key (e.g. `Enter`) to a session
    pub async fn send_key(&self, session_name: &str, key: &str) -> Result<()> {
        let target = pane_target(session_name);
        self.execute(&["send-keys", "-t", &target, key]).await?;
        Ok(())
    }

    /// Switch the current tmux client to a session
    pub async fn switch_client(&self, session_name: &str) -> Result<()> {
        let target = session_target(session_name);
        self.execute(&["switch-client", "-t", &target]).await?;
        Ok(())
    }

    /// Attach the current terminal to a session until the user detaches
    ///
    /// Bypasses the semaphore and timeout: the attach lasts as long as the user wants.
    pub async fn attach(&self, session_name: &str) -> Result<()> {
        let target = session_target(session_name);
        let status = Command::new("tmux")
            .args(["attach-session", "-t", target.as_str()])
            .status()
            .await
            .map_err(|_| TmuxError::NotInstalled)?;

        debug!("tmux attach-session exited with {}", status);
        Ok(())
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact-match session target; a bare name would be prefix-matched by tmux
pub fn session_target(session_name: &str) -> String {
    format!("={}", session_name)
}

/// Active pane of the exactly-named session
pub fn pane_target(session_name: &str) -> String {
    format!("={}:", session_name)
}

/// Whether this process runs inside a tmux client
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_executor_creation() {
        let executor = TmuxExecutor::new();
        assert_eq!(executor.timeout, DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    async fn test_executor_with_custom_concurrency() {
        let executor = TmuxExecutor::with_max_concurrent(8);

        assert_eq!(executor.semaphore.available_permits(), 8);
        assert_eq!(executor.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_targets_are_exact() {
        assert_eq!(session_target("aspnet-ef"), "=aspnet-ef");
        assert_eq!(pane_target("aspnet-ef"), "=aspnet-ef:");
    }

    // Tests against a live tmux server live in tests/tmux_test.rs
}
