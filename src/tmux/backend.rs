//! Session backend abstraction
//!
//! The dispatcher only needs four operations on a named terminal session.
//! `TmuxExecutor` provides them against a real tmux server; tests provide
//! recording fakes.

use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use super::{TmuxExecutor, inside_tmux};
use crate::error::Result;

/// Characters tmux rejects or rewrites in session names
static INVALID_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.:\s]").unwrap());

/// Make a configured session name acceptable to tmux
pub fn sanitize_session_name(name: &str) -> String {
    INVALID_NAME_CHARS
        .replace_all(name.trim(), "_")
        .into_owned()
}

/// Named, reusable terminal sessions
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Whether a session with this exact name is alive
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Create a detached session, optionally starting in `working_dir`
    async fn create(&self, name: &str, working_dir: Option<&Path>) -> Result<()>;

    /// Bring the session to the foreground if possible; returns whether it was
    async fn focus(&self, name: &str) -> Result<bool>;

    /// Type a line into the session and press Enter
    async fn send_line(&self, name: &str, line: &str) -> Result<()>;

    /// Hand the controlling terminal over to the session
    async fn attach(&self, name: &str) -> Result<()>;
}

#[async_trait]
impl SessionBackend for TmuxExecutor {
    async fn exists(&self, name: &str) -> Result<bool> {
        self.session_exists(name).await
    }

    async fn create(&self, name: &str, working_dir: Option<&Path>) -> Result<()> {
        self.create_session(name, working_dir).await
    }

    async fn focus(&self, name: &str) -> Result<bool> {
        if !inside_tmux() {
            debug!("Not inside tmux, cannot switch client to {}", name);
            return Ok(false);
        }
        self.switch_client(name).await?;
        Ok(true)
    }

    async fn send_line(&self, name: &str, line: &str) -> Result<()> {
        self.send_literal(name, line).await?;
        self.send_key(name, "Enter").await
    }

    async fn attach(&self, name: &str) -> Result<()> {
        TmuxExecutor::attach(self, name).await
    }
}
