//! Prompt request and notice types

use std::fmt;

/// One row of a single-select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Primary text (e.g. a file name)
    pub label: String,
    /// Secondary text (e.g. the full path)
    pub description: String,
}

impl PickItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for PickItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}  {}", self.label, self.description)
        }
    }
}

/// A free-text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    /// Short question shown to the user
    pub title: String,
    /// Example or hint text
    pub prompt: Option<String>,
    /// Pre-filled, editable value
    pub default: String,
}

impl InputRequest {
    pub fn new(title: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: None,
            default: default.into(),
        }
    }

    /// Attach an example/hint line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Text rendered in front of the input field
    pub fn display_text(&self) -> String {
        match &self.prompt {
            Some(prompt) => format!("{} ({})", self.title, prompt),
            None => self.title.clone(),
        }
    }
}

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A message surfaced to the user outside of a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_display_text() {
        let request = InputRequest::new("Migration name", "InitialCreate")
            .with_prompt("Example: InitialCreate");
        assert_eq!(
            request.display_text(),
            "Migration name (Example: InitialCreate)"
        );

        let request = InputRequest::new("View name", "MyView");
        assert_eq!(request.display_text(), "View name");
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::warning("No Identity files selected.").to_string(),
            "warning: No Identity files selected."
        );
    }
}
