//! Async tmux integration module
//!
//! Provides non-blocking tmux operations:
//! - `TmuxExecutor` - Semaphore-controlled async command execution
//! - `SessionBackend` - The named-session operations command dispatch relies on

mod backend;
mod executor;

pub use backend::*;
pub use executor::*;
