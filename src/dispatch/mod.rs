//! Command dispatch
//!
//! Gets a finished [`CommandInvocation`] in front of a shell. The default path
//! goes through a [`SessionRegistry`] so every action lands in the same named
//! tmux session.

mod dispatcher;
mod invocation;
mod registry;

pub use dispatcher::*;
pub use invocation::*;
pub use registry::*;
