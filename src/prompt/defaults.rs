//! Non-interactive prompter for scripted runs (`--yes`)

use async_trait::async_trait;
use tracing::info;

use super::{InputRequest, Notice, PickItem, Prompter, emit_notice};
use crate::error::Result;

/// Accepts every default without showing any UI
///
/// Single-select lists resolve to their first entry, multi-select lists to
/// every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for DefaultsPrompter {
    async fn pick_one(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>> {
        let Some(first) = items.first() else {
            return Ok(None);
        };
        info!("{}: using {}", title, first.description);
        Ok(Some(0))
    }

    async fn pick_many(&self, _title: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        Ok(Some((0..items.len()).collect()))
    }

    async fn input(&self, request: &InputRequest) -> Result<Option<String>> {
        Ok(Some(request.default.clone()))
    }

    fn notify(&self, notice: Notice) {
        emit_notice(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults_answers() {
        let prompter = DefaultsPrompter::new();

        let items = vec![
            PickItem::new("A.csproj", "/a/A.csproj"),
            PickItem::new("B.csproj", "/b/B.csproj"),
        ];
        assert_eq!(prompter.pick_one("Select", &items).await.unwrap(), Some(0));
        assert_eq!(prompter.pick_one("Select", &[]).await.unwrap(), None);

        let files = vec!["Login".to_string(), "Logout".to_string()];
        assert_eq!(
            prompter.pick_many("Files", &files).await.unwrap(),
            Some(vec![0, 1])
        );

        let request = InputRequest::new("Migration name", "InitialCreate");
        assert_eq!(
            prompter.input(&request).await.unwrap().as_deref(),
            Some("InitialCreate")
        );
    }
}
