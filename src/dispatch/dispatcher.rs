//! Command dispatchers
//!
//! - `CommandDispatcher` - types `cd` and the command into the reusable session
//! - `DirectDispatcher` - spawns the command with its working directory set
//! - `DryRunDispatcher` - prints what would be sent
//!
//! None of them look at what the command does; output is for the user's eyes.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use super::{CommandInvocation, SessionRegistry, cd_line};
use crate::error::Result;
use crate::tmux::SessionBackend;

/// Something that can execute a finished command line
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<()>;
}

/// Sends commands to one named, reusable session
pub struct CommandDispatcher<B> {
    registry: SessionRegistry<B>,
    attach: bool,
}

impl<B: SessionBackend> CommandDispatcher<B> {
    pub fn new(registry: SessionRegistry<B>) -> Self {
        Self {
            registry,
            attach: false,
        }
    }

    /// Attach the controlling terminal after sending, when focus is not possible
    pub fn with_attach(mut self, attach: bool) -> Self {
        self.attach = attach;
        self
    }

    pub fn registry(&self) -> &SessionRegistry<B> {
        &self.registry
    }

    /// Run `command` in the session, changing into `working_dir` first
    ///
    /// The `cd` and the command are two separate writes; nothing stops the
    /// user from typing into the session in between.
    #[instrument(skip(self))]
    pub async fn run(&self, command: &str, working_dir: Option<&Path>) -> Result<()> {
        let session = self.registry.find_or_create(working_dir).await?;
        let backend = self.registry.backend();

        let focused = backend.focus(&session.name).await?;

        if let Some(dir) = working_dir {
            backend.send_line(&session.name, &cd_line(dir)).await?;
        }
        backend.send_line(&session.name, command).await?;

        if focused {
            return Ok(());
        }

        if self.attach {
            backend.attach(&session.name).await?;
        } else {
            info!(
                "Sent to session '{}'; attach with: tmux attach -t {}",
                session.name, session.name
            );
        }

        Ok(())
    }
}

#[async_trait]
impl<B: SessionBackend> Dispatch for CommandDispatcher<B> {
    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<()> {
        self.run(invocation.command(), invocation.working_dir()).await
    }
}

/// Spawns the command through a shell, in its working directory
///
/// Directory and command are set in one step, so there is no window
/// between the two.
#[derive(Debug, Clone)]
pub struct DirectDispatcher {
    shell: String,
}

impl DirectDispatcher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

#[async_trait]
impl Dispatch for DirectDispatcher {
    #[instrument(skip(self), fields(command = %invocation))]
    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<()> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(invocation.command());
        if let Some(dir) = invocation.working_dir() {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await?;
        debug!("Command exited with {}", status);
        Ok(())
    }
}

/// Prints the lines a session would receive
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunDispatcher;

#[async_trait]
impl Dispatch for DryRunDispatcher {
    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<()> {
        if let Some(cd) = invocation.cd_line() {
            println!("{}", cd);
        }
        println!("{}", invocation.command());
        Ok(())
    }
}
