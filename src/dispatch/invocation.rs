//! Finished command lines

use std::fmt;
use std::path::{Path, PathBuf};

/// A complete command line plus the directory it should run in
///
/// The command text is opaque: it is never parsed or validated, only forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    command: String,
    working_dir: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_dir: None,
        }
    }

    /// Run the command from `dir`
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Shell line that changes into the working directory, if there is one
    pub fn cd_line(&self) -> Option<String> {
        self.working_dir().map(cd_line)
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)
    }
}

/// `cd "<dir>"`
pub fn cd_line(dir: &Path) -> String {
    format!("cd \"{}\"", dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_line() {
        let invocation = CommandInvocation::new("dotnet ef migrations list").in_dir("/src/My App");
        assert_eq!(invocation.cd_line().as_deref(), Some("cd \"/src/My App\""));
        assert_eq!(invocation.to_string(), "dotnet ef migrations list");

        let invocation = CommandInvocation::new("dotnet --info");
        assert!(invocation.cd_line().is_none());
    }
}
