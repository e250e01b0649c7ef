//! Configuration module
//!
//! Handles user configuration (`config.toml` in the platform config directory),
//! layered with `ASPNET_SCAFFOLDER_*` environment variables.

mod settings;

pub use settings::*;
