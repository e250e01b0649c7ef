//! Command line assembly
//!
//! A small builder over space-separated words. Optional values that are
//! blank drop their flag entirely: a flag is never emitted with an empty
//! argument.

use std::path::Path;

/// Space-joined command line under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    words: Vec<String>,
}

impl CommandLine {
    /// Start with the program and its fixed leading words (`dotnet ef migrations add`)
    pub fn new(program: &str) -> Self {
        Self {
            words: vec![program.to_string()],
        }
    }

    /// Append a positional word as-is
    pub fn arg(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Append a bare switch (`--force`)
    pub fn switch(self, flag: &str) -> Self {
        self.arg(flag)
    }

    /// Append `flag value`
    pub fn option(self, flag: &str, value: &str) -> Self {
        self.arg(flag).arg(value)
    }

    /// Append `flag "value"`
    pub fn quoted_option(self, flag: &str, value: &str) -> Self {
        self.arg(flag).arg(quote(value))
    }

    /// Append `--project "<path>"`
    pub fn project(self, project: &Path) -> Self {
        self.quoted_option("--project", &project.display().to_string())
    }

    /// Append `flag value` when `value` is non-blank (trimmed), otherwise nothing
    pub fn optional_option(self, flag: &str, value: Option<&str>) -> Self {
        match non_blank(value) {
            Some(value) => self.option(flag, value),
            None => self,
        }
    }

    /// Append a positional word when it is non-blank (trimmed), otherwise nothing
    pub fn optional_arg(self, value: Option<&str>) -> Self {
        match non_blank(value) {
            Some(value) => self.arg(value),
            None => self,
        }
    }

    /// Finished command text
    pub fn build(self) -> String {
        self.words.join(" ")
    }
}

/// Trimmed value, or `None` if nothing is left
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}
