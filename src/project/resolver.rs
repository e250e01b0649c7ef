//! Project resolution
//!
//! Narrows the discovered candidates down to exactly one project:
//! - none found: one error notice, no project
//! - one found: used as-is, no UI
//! - several found: the user picks one (or dismisses the list)

use tracing::{debug, instrument};

use super::{ProjectDiscovery, ProjectReference};
use crate::error::Result;
use crate::prompt::{Notice, PickItem, Prompter};

/// Error notice shown when the workspace has no project files
pub const NO_PROJECT_MESSAGE: &str = "No .csproj file found in the workspace.";

/// Title of the project pick list
pub const SELECT_PROJECT_TITLE: &str = "Select project (.csproj)";

/// Resolves the project an action operates on
pub struct ProjectResolver<'a> {
    discovery: &'a dyn ProjectDiscovery,
    prompter: &'a dyn Prompter,
}

impl<'a> ProjectResolver<'a> {
    pub fn new(discovery: &'a dyn ProjectDiscovery, prompter: &'a dyn Prompter) -> Self {
        Self {
            discovery,
            prompter,
        }
    }

    /// Resolve to a single project, or `None` when there is nothing to act on
    #[instrument(skip(self))]
    pub async fn resolve(&self) -> Result<Option<ProjectReference>> {
        let mut candidates = self.discovery.discover().await?;

        match candidates.len() {
            0 => {
                self.prompter.notify(Notice::error(NO_PROJECT_MESSAGE));
                Ok(None)
            }
            1 => Ok(candidates.pop()),
            n => {
                debug!("{} candidate projects, asking the user", n);
                let items: Vec<PickItem> = candidates
                    .iter()
                    .map(|p| PickItem::new(p.label(), p.path().display().to_string()))
                    .collect();

                let picked = self
                    .prompter
                    .pick_one(SELECT_PROJECT_TITLE, &items)
                    .await?;

                Ok(picked.and_then(|index| candidates.get(index).cloned()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::project::FixedDiscovery;
    use crate::prompt::InputRequest;

    /// Prompter that answers pick lists from a fixed choice and records UI usage
    #[derive(Default)]
    struct PickRecorder {
        choice: Option<usize>,
        lists: Mutex<Vec<Vec<PickItem>>>,
        notices: Mutex<Vec<Notice>>,
    }

    #[async_trait]
    impl Prompter for PickRecorder {
        async fn pick_one(&self, _title: &str, items: &[PickItem]) -> Result<Option<usize>> {
            self.lists.lock().unwrap().push(items.to_vec());
            Ok(self.choice)
        }

        async fn pick_many(&self, _title: &str, _items: &[String]) -> Result<Option<Vec<usize>>> {
            Ok(None)
        }

        async fn input(&self, _request: &InputRequest) -> Result<Option<String>> {
            Ok(None)
        }

        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    fn projects(paths: &[&str]) -> FixedDiscovery {
        FixedDiscovery::new(paths.iter().map(ProjectReference::new).collect())
    }

    #[tokio::test]
    async fn test_no_projects_notifies_once() {
        let discovery = projects(&[]);
        let prompter = PickRecorder::default();

        let resolved = ProjectResolver::new(&discovery, &prompter)
            .resolve()
            .await
            .unwrap();

        assert!(resolved.is_none());
        let notices = prompter.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0], Notice::error(NO_PROJECT_MESSAGE));
        assert!(prompter.lists.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_project_skips_ui() {
        let discovery = projects(&["/src/App/App.csproj"]);
        let prompter = PickRecorder::default();

        let resolved = ProjectResolver::new(&discovery, &prompter)
            .resolve()
            .await
            .unwrap();

        assert_eq!(resolved, Some(ProjectReference::new("/src/App/App.csproj")));
        assert!(prompter.lists.lock().unwrap().is_empty());
        assert!(prompter.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_multiple_projects_offers_all() {
        let discovery = projects(&["/src/Api/Api.csproj", "/src/Web/Web.csproj"]);
        let prompter = PickRecorder {
            choice: Some(1),
            ..Default::default()
        };

        let resolved = ProjectResolver::new(&discovery, &prompter)
            .resolve()
            .await
            .unwrap();

        assert_eq!(resolved, Some(ProjectReference::new("/src/Web/Web.csproj")));
        let lists = prompter.lists.lock().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(
            lists[0],
            vec![
                PickItem::new("Api.csproj", "/src/Api/Api.csproj"),
                PickItem::new("Web.csproj", "/src/Web/Web.csproj"),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_pick_is_not_an_error() {
        let discovery = projects(&["/a/A.csproj", "/b/B.csproj"]);
        let prompter = PickRecorder::default();

        let resolved = ProjectResolver::new(&discovery, &prompter)
            .resolve()
            .await
            .unwrap();

        assert!(resolved.is_none());
        assert!(prompter.notices.lock().unwrap().is_empty());
    }
}
