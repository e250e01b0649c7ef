//! User-facing actions
//!
//! - `Action` - the catalog of registered actions and their identifiers
//! - `ActionRunner` - resolve → prompt → build → dispatch for each action
//! - `templates` - the fixed command templates per action
//! - `CommandLine` - builder that drops blank optional flags

mod catalog;
mod command;
mod flows;
pub mod templates;

pub use catalog::*;
pub use command::*;
pub use flows::*;
