//! Named session registry
//!
//! Owns the lookup key of the one reusable session and the backend it lives
//! in. Every lookup goes back to the backend, so a session the user closed
//! by hand is recreated on the next dispatch.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::tmux::{SessionBackend, sanitize_session_name};

/// Handle to the session a command is sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSession {
    /// Session name in the backend
    pub name: String,
    /// Whether this lookup had to create it
    pub created: bool,
}

/// Find-or-create access to a single named session
pub struct SessionRegistry<B> {
    backend: B,
    name: String,
}

impl<B: SessionBackend> SessionRegistry<B> {
    pub fn new(backend: B, name: &str) -> Self {
        Self {
            backend,
            name: sanitize_session_name(name),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Return the live session, creating it if it does not exist
    #[instrument(skip(self), fields(name = %self.name))]
    pub async fn find_or_create(&self, working_dir: Option<&Path>) -> Result<ExecutionSession> {
        if self.backend.exists(&self.name).await? {
            debug!("Reusing session {}", self.name);
            return Ok(ExecutionSession {
                name: self.name.clone(),
                created: false,
            });
        }

        self.backend.create(&self.name, working_dir).await?;
        info!("Created session {}", self.name);

        Ok(ExecutionSession {
            name: self.name.clone(),
            created: true,
        })
    }
}
