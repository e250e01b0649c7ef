//! ASP.NET Scaffolder - terminal front-end for `dotnet aspnet-codegenerator` and `dotnet ef`
//!
//! Each action resolves a `.csproj`, asks for the handful of values the tool
//! needs, builds the command line and hands it to a reusable tmux session.
//! The tools do all the real work; their output is for the user to read.
//!
//! # Modules
//!
//! - [`actions`] - Action catalog, command templates and prompt flows
//! - [`project`] - `.csproj` discovery and selection
//! - [`prompt`] - Interactive and non-interactive prompt surfaces
//! - [`dispatch`] - Named-session, direct and dry-run command dispatch
//! - [`tmux`] - Async tmux integration
//! - [`config`] - Layered configuration
//! - [`error`] - Error types

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod project;
pub mod prompt;
pub mod tmux;

pub use actions::{Action, ActionOutcome, ActionRunner};
pub use config::Config;
pub use error::{Error, Result};
pub use project::{ProjectReference, ProjectResolver};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
