//! Action flows
//!
//! Every action is the same linear chain: resolve the project, ask for each
//! value, build the command, dispatch it from the project's directory. A
//! dismissed prompt ends the chain before anything is dispatched.

use tracing::{debug, info, instrument};

use super::{Action, templates};
use crate::config::Config;
use crate::dispatch::{CommandInvocation, Dispatch};
use crate::error::Result;
use crate::project::{ProjectDiscovery, ProjectReference, ProjectResolver};
use crate::prompt::{InputRequest, Notice, Prompter};

/// Warning shown when the Identity file picker comes back empty
pub const NO_IDENTITY_FILES_MESSAGE: &str = "No Identity files selected.";

/// Why an action stopped before dispatching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// No project was found, or the project pick list was dismissed
    NoProject,
    /// A required prompt was dismissed or left empty
    Cancelled,
    /// The Identity file picker returned no files
    NothingSelected,
}

/// Result of running one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Dispatched(CommandInvocation),
    Aborted(AbortReason),
}

impl ActionOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

/// Values pre-filled into prompts
#[derive(Debug, Clone)]
pub struct ActionDefaults {
    pub db_context: String,
    pub identity_files: Vec<String>,
}

impl Default for ActionDefaults {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ActionDefaults {
    pub fn from_config(config: &Config) -> Self {
        Self {
            db_context: config.default_db_context.clone(),
            identity_files: config.identity_files.clone(),
        }
    }
}

/// Runs actions against a discovery source, a prompter and a dispatcher
pub struct ActionRunner<'a> {
    discovery: &'a dyn ProjectDiscovery,
    prompter: &'a dyn Prompter,
    dispatcher: &'a dyn Dispatch,
    defaults: ActionDefaults,
}

impl<'a> ActionRunner<'a> {
    pub fn new(
        discovery: &'a dyn ProjectDiscovery,
        prompter: &'a dyn Prompter,
        dispatcher: &'a dyn Dispatch,
    ) -> Self {
        Self {
            discovery,
            prompter,
            dispatcher,
            defaults: ActionDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: ActionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Run one action to completion or abort
    #[instrument(skip(self))]
    pub async fn run(&self, action: Action) -> Result<ActionOutcome> {
        let Some(project) = ProjectResolver::new(self.discovery, self.prompter)
            .resolve()
            .await?
        else {
            debug!("No project resolved, aborting");
            return Ok(ActionOutcome::Aborted(AbortReason::NoProject));
        };

        let command = match action {
            Action::ControllerCrud => self.controller_crud(&project).await?,
            Action::RazorCrud => self.razor_crud(&project).await?,
            Action::IdentityFull => self.identity_full(&project).await?,
            Action::IdentitySelect => self.identity_select(&project).await?,
            Action::EmptyView => self.empty_view(&project).await?,
            Action::EmptyController => self.empty_controller(&project).await?,
            Action::AddMigration => self.add_migration(&project).await?,
            Action::UpdateDatabase => self.update_database(&project).await?,
            Action::ListMigrations => self.list_migrations(&project).await?,
            Action::DbContextInfo => self.db_context_info(&project).await?,
        };

        let command = match command {
            Ok(command) => command,
            Err(reason) => {
                debug!("Aborted: {:?}", reason);
                return Ok(ActionOutcome::Aborted(reason));
            }
        };

        let invocation = CommandInvocation::new(command).in_dir(project.directory());
        info!("Dispatching: {}", invocation);
        self.dispatcher.dispatch(&invocation).await?;

        Ok(ActionOutcome::Dispatched(invocation))
    }

    async fn controller_crud(&self, project: &ProjectReference) -> Result<Built> {
        let Some(controller) = self
            .required(
                InputRequest::new("Controller name", "JobPostingController")
                    .with_prompt("Example: JobPostingController"),
            )
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let Some(model) = self
            .required(
                InputRequest::new("Model name", "JobPosting").with_prompt("Example: JobPosting"),
            )
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let Some(db_context) = self.required(self.db_context_request()).await? else {
            return Ok(Err(AbortReason::Cancelled));
        };

        Ok(Ok(templates::controller_crud(
            project.path(),
            &controller,
            &model,
            &db_context,
        )))
    }

    async fn razor_crud(&self, project: &ProjectReference) -> Result<Built> {
        let Some(model) = self
            .required(InputRequest::new("Model name", "JobPosting"))
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let Some(db_context) = self.required(self.db_context_request()).await? else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let Some(folder) = self
            .required(InputRequest::new("Output folder (under Pages/...)", "JobPostings"))
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };

        Ok(Ok(templates::razor_crud(
            project.path(),
            &model,
            &db_context,
            &folder,
        )))
    }

    async fn identity_full(&self, project: &ProjectReference) -> Result<Built> {
        let Some(db_context) = self.required(self.db_context_request()).await? else {
            return Ok(Err(AbortReason::Cancelled));
        };

        Ok(Ok(templates::identity_full(project.path(), &db_context)))
    }

    async fn identity_select(&self, project: &ProjectReference) -> Result<Built> {
        let request = self
            .db_context_request()
            .with_prompt(format!("Example: {}", self.defaults.db_context));
        let Some(db_context) = self.required(request).await? else {
            return Ok(Err(AbortReason::Cancelled));
        };

        let choices = &self.defaults.identity_files;
        let picked = self
            .prompter
            .pick_many("Select Identity files to scaffold", choices)
            .await?
            .unwrap_or_default();

        let files: Vec<String> = picked
            .into_iter()
            .filter_map(|i| choices.get(i).cloned())
            .collect();

        if files.is_empty() {
            self.prompter.notify(Notice::warning(NO_IDENTITY_FILES_MESSAGE));
            return Ok(Err(AbortReason::NothingSelected));
        }

        Ok(Ok(templates::identity_files(
            project.path(),
            &db_context,
            &files,
        )))
    }

    async fn empty_view(&self, project: &ProjectReference) -> Result<Built> {
        let Some(view) = self.required(InputRequest::new("View name", "MyView")).await? else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let Some(controller) = self
            .required(InputRequest::new("Controller name (folder under Views)", "Home"))
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };

        Ok(Ok(templates::empty_view(project.path(), &view, &controller)))
    }

    async fn empty_controller(&self, project: &ProjectReference) -> Result<Built> {
        let Some(controller) = self
            .required(InputRequest::new("Controller name", "SampleController"))
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };

        Ok(Ok(templates::empty_controller(project.path(), &controller)))
    }

    async fn add_migration(&self, project: &ProjectReference) -> Result<Built> {
        let Some(name) = self
            .required(
                InputRequest::new("Migration name", "InitialCreate")
                    .with_prompt("Example: InitialCreate"),
            )
            .await?
        else {
            return Ok(Err(AbortReason::Cancelled));
        };
        let db_context = self
            .optional(
                InputRequest::new("DbContext name (optional)", "")
                    .with_prompt("Leave empty if you only have one DbContext"),
            )
            .await?;

        Ok(Ok(templates::add_migration(
            project.path(),
            &name,
            db_context.as_deref(),
        )))
    }

    async fn update_database(&self, project: &ProjectReference) -> Result<Built> {
        let target = self
            .optional(
                InputRequest::new("Target migration (optional)", "")
                    .with_prompt("Leave empty to update to latest, or specify migration name"),
            )
            .await?;

        Ok(Ok(templates::update_database(
            project.path(),
            target.as_deref(),
        )))
    }

    async fn list_migrations(&self, project: &ProjectReference) -> Result<Built> {
        let db_context = self.optional(self.optional_db_context_request()).await?;

        Ok(Ok(templates::list_migrations(
            project.path(),
            db_context.as_deref(),
        )))
    }

    async fn db_context_info(&self, project: &ProjectReference) -> Result<Built> {
        let db_context = self.optional(self.optional_db_context_request()).await?;

        Ok(Ok(templates::db_context_info(
            project.path(),
            db_context.as_deref(),
        )))
    }

    fn db_context_request(&self) -> InputRequest {
        InputRequest::new("DbContext name", self.defaults.db_context.clone())
    }

    fn optional_db_context_request(&self) -> InputRequest {
        InputRequest::new("DbContext name (optional)", "").with_prompt("Leave empty to use default")
    }

    /// A value the command cannot do without: dismissed or empty means stop
    async fn required(&self, request: InputRequest) -> Result<Option<String>> {
        let answer = self.prompter.input(&request).await?;
        Ok(answer.filter(|v| !v.is_empty()))
    }

    /// A value whose flag is simply left out when blank; dismissing counts as blank
    async fn optional(&self, request: InputRequest) -> Result<Option<String>> {
        let answer = self.prompter.input(&request).await?;
        Ok(answer
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }
}

/// Command text, or the reason the flow stopped
type Built = std::result::Result<String, AbortReason>;
