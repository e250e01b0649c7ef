//! Registered actions
//!
//! Each action has a stable dotted identifier (`aspnet.ef.addMigration`) and a
//! kebab-case subcommand name (`add-migration`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Every action the tool can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ControllerCrud,
    RazorCrud,
    IdentityFull,
    IdentitySelect,
    EmptyView,
    EmptyController,
    AddMigration,
    UpdateDatabase,
    ListMigrations,
    DbContextInfo,
}

impl Action {
    /// All actions in registration order
    pub const ALL: [Action; 10] = [
        Action::ControllerCrud,
        Action::RazorCrud,
        Action::IdentityFull,
        Action::IdentitySelect,
        Action::EmptyView,
        Action::EmptyController,
        Action::AddMigration,
        Action::UpdateDatabase,
        Action::ListMigrations,
        Action::DbContextInfo,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::ControllerCrud => "aspnet.scaffold.controllerCrud",
            Self::RazorCrud => "aspnet.scaffold.razorCrud",
            Self::IdentityFull => "aspnet.scaffold.identity",
            Self::IdentitySelect => "aspnet.scaffold.identitySelect",
            Self::EmptyView => "aspnet.scaffold.emptyView",
            Self::EmptyController => "aspnet.scaffold.emptyController",
            Self::AddMigration => "aspnet.ef.addMigration",
            Self::UpdateDatabase => "aspnet.ef.updateDatabase",
            Self::ListMigrations => "aspnet.ef.listMigrations",
            Self::DbContextInfo => "aspnet.ef.dbContextInfo",
        }
    }

    /// CLI subcommand name
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::ControllerCrud => "controller-crud",
            Self::RazorCrud => "razor-crud",
            Self::IdentityFull => "identity",
            Self::IdentitySelect => "identity-select",
            Self::EmptyView => "empty-view",
            Self::EmptyController => "empty-controller",
            Self::AddMigration => "add-migration",
            Self::UpdateDatabase => "update-database",
            Self::ListMigrations => "list-migrations",
            Self::DbContextInfo => "db-context-info",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::ControllerCrud => "Scaffold an MVC controller with CRUD views",
            Self::RazorCrud => "Scaffold CRUD Razor pages",
            Self::IdentityFull => "Scaffold the full default Identity UI",
            Self::IdentitySelect => "Scaffold selected Identity pages",
            Self::EmptyView => "Scaffold an empty view",
            Self::EmptyController => "Scaffold an empty controller",
            Self::AddMigration => "Add an EF Core migration",
            Self::UpdateDatabase => "Apply migrations to the database",
            Self::ListMigrations => "List EF Core migrations",
            Self::DbContextInfo => "Show DbContext information",
        }
    }

    /// Look up an action by identifier or subcommand name
    pub fn lookup(name: &str) -> Option<Action> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == name || a.command_name() == name)
    }

    /// Serializable summary for `actions --json`
    pub fn info(&self) -> ActionInfo {
        ActionInfo {
            id: self.id(),
            command: self.command_name(),
            description: self.description(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown action '{}'", s))
    }
}

/// Catalog entry as printed by `actions`
#[derive(Debug, Clone, Serialize)]
pub struct ActionInfo {
    pub id: &'static str,
    pub command: &'static str,
    pub description: &'static str,
}
