//! User interaction surface
//!
//! Actions never talk to the terminal directly; they go through a [`Prompter`]:
//! - `TerminalPrompter` - interactive prompts via `dialoguer`
//! - `DefaultsPrompter` - answers every prompt with its default (`--yes`)
//!
//! Every prompt returns `Ok(None)` when the user dismisses it.

mod defaults;
mod terminal;
mod types;

pub use defaults::*;
pub use terminal::*;
pub use types::*;

use async_trait::async_trait;

use crate::error::Result;

/// Prompts and notices shown to the user
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Single-select list; returns the chosen index
    async fn pick_one(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>>;

    /// Multi-select list; returns the chosen indices in list order
    async fn pick_many(&self, title: &str, items: &[String]) -> Result<Option<Vec<usize>>>;

    /// Free-text input
    async fn input(&self, request: &InputRequest) -> Result<Option<String>>;

    /// Show a notice without waiting for an answer
    fn notify(&self, notice: Notice);
}

/// Render a notice on stderr
pub fn emit_notice(notice: &Notice) {
    tracing::debug!(level = %notice.level, "notice: {}", notice.message);
    eprintln!("{}", notice);
}
