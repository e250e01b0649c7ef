//! Interactive terminal prompts
//!
//! `dialoguer` blocks on stdin, so each prompt runs on the blocking pool.

use std::io;

use async_trait::async_trait;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use tracing::debug;

use super::{InputRequest, Notice, PickItem, Prompter, emit_notice};
use crate::error::{PromptError, Result};

/// Prompter backed by the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn pick_one(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>> {
        let title = title.to_string();
        let rows: Vec<String> = items.iter().map(|item| item.to_string()).collect();

        let picked = tokio::task::spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt(title)
                .items(&rows)
                .default(0)
                .interact_opt()
        })
        .await?;

        cancelled_on_interrupt(picked)
    }

    async fn pick_many(&self, title: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        let title = format!("{} (space to toggle, enter to confirm)", title);
        let rows = items.to_vec();

        let picked = tokio::task::spawn_blocking(move || {
            MultiSelect::with_theme(&ColorfulTheme::default())
                .with_prompt(title)
                .items(&rows)
                .interact_opt()
        })
        .await?;

        cancelled_on_interrupt(picked)
    }

    async fn input(&self, request: &InputRequest) -> Result<Option<String>> {
        let text = request.display_text();
        let initial = request.default.clone();

        // Pre-filled like an editable text box: clearing the field submits ""
        let answer = tokio::task::spawn_blocking(move || {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(text)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()
                .map(Some)
        })
        .await?;

        cancelled_on_interrupt(answer)
    }

    fn notify(&self, notice: Notice) {
        emit_notice(&notice);
    }
}

/// Treat an interrupted read as a dismissed prompt
fn cancelled_on_interrupt<T>(
    result: std::result::Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            debug!("Prompt interrupted");
            Ok(None)
        }
        Err(e) => Err(PromptError::from(e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_is_cancellation() {
        let interrupted: std::result::Result<Option<usize>, dialoguer::Error> = Err(
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c")),
        );
        assert!(cancelled_on_interrupt(interrupted).unwrap().is_none());
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let broken: std::result::Result<Option<usize>, dialoguer::Error> = Err(
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
        );
        let err = cancelled_on_interrupt(broken).unwrap_err();
        assert!(err.to_string().contains("Terminal interaction failed"));
    }
}
