//! ASP.NET Scaffolder - scaffolding and EF Core commands from the terminal
//!
//! Run with `aspnet-scaffolder` to pick an action, or name one directly
//! (`aspnet-scaffolder add-migration`). See `--help` for usage.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use color_eyre::eyre::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aspnet_scaffolder::{
    APP_NAME, Action, ActionOutcome, ActionRunner, ProjectReference, VERSION,
    actions::ActionDefaults,
    config::{Config, DispatchMode},
    dispatch::{CommandDispatcher, DirectDispatcher, Dispatch, DryRunDispatcher, SessionRegistry},
    project::{FixedDiscovery, ProjectDiscovery, WorkspaceDiscovery},
    prompt::{DefaultsPrompter, PickItem, Prompter, TerminalPrompter},
    tmux::TmuxExecutor,
};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Scaffold ASP.NET code and run EF Core migrations from the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory searched for .csproj files (default: current directory)
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,

    /// Use this .csproj instead of searching the workspace
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Accept every default without prompting
    #[arg(short, long, global = true)]
    yes: bool,

    /// Print the commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold an MVC controller with CRUD views
    ControllerCrud,
    /// Scaffold CRUD Razor pages
    RazorCrud,
    /// Scaffold the full default Identity UI
    Identity,
    /// Scaffold selected Identity pages
    IdentitySelect,
    /// Scaffold an empty view
    EmptyView,
    /// Scaffold an empty controller
    EmptyController,
    /// Add an EF Core migration
    AddMigration,
    /// Apply migrations to the database
    UpdateDatabase,
    /// List EF Core migrations
    ListMigrations,
    /// Show DbContext information
    DbContextInfo,

    /// Run an action by identifier (e.g. aspnet.ef.addMigration)
    Run {
        /// Action identifier or subcommand name
        action: Action,
    },

    /// List registered actions
    Actions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        /// Initialize config file with defaults
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    /// The action this subcommand runs, if it is one
    fn action(&self) -> Option<Action> {
        match self {
            Self::ControllerCrud => Some(Action::ControllerCrud),
            Self::RazorCrud => Some(Action::RazorCrud),
            Self::Identity => Some(Action::IdentityFull),
            Self::IdentitySelect => Some(Action::IdentitySelect),
            Self::EmptyView => Some(Action::EmptyView),
            Self::EmptyController => Some(Action::EmptyController),
            Self::AddMigration => Some(Action::AddMigration),
            Self::UpdateDatabase => Some(Action::UpdateDatabase),
            Self::ListMigrations => Some(Action::ListMigrations),
            Self::DbContextInfo => Some(Action::DbContextInfo),
            Self::Run { action } => Some(*action),
            Self::Actions { .. } | Self::Config { .. } => None,
        }
    }
}

fn setup_logging(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        // Use info level for our crate, warn for dependencies
        EnvFilter::new("warn").add_directive("aspnet_scaffolder=info".parse()?)
    };

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(file).with_target(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    }

    Ok(())
}

/// Reject flag combinations clap cannot express
///
/// `--yes` never picks an action on the user's behalf.
fn check_usage(cli: &Cli) -> std::result::Result<(), clap::Error> {
    if cli.yes && cli.command.is_none() {
        return Err(Cli::command().error(
            ErrorKind::MissingSubcommand,
            "--yes requires an action subcommand (see `actions`)",
        ));
    }
    Ok(())
}

/// Where candidate projects come from for this run
fn build_discovery(cli: &Cli, config: &Config) -> Result<Box<dyn ProjectDiscovery>> {
    if let Some(path) = &cli.project {
        let project = ProjectReference::from_user_path(path)?;
        return Ok(Box::new(FixedDiscovery::new(vec![project])));
    }

    let root = match &cli.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    Ok(Box::new(WorkspaceDiscovery::from_config(root, config)?))
}

/// How finished commands are executed for this run
async fn build_dispatcher(cli: &Cli, config: &Config) -> Result<Box<dyn Dispatch>> {
    if cli.dry_run {
        return Ok(Box::new(DryRunDispatcher));
    }

    match config.dispatch_mode {
        DispatchMode::Direct => Ok(Box::new(DirectDispatcher::new(&config.shell_program))),
        DispatchMode::Session => {
            let tmux = TmuxExecutor::with_max_concurrent(config.max_concurrent_tmux);
            tmux.check_installed().await?;

            let registry = SessionRegistry::new(tmux, &config.session_name);
            Ok(Box::new(
                CommandDispatcher::new(registry).with_attach(config.attach),
            ))
        }
    }
}

/// Let the user pick an action when none was named
async fn pick_action(prompter: &dyn Prompter) -> Result<Option<Action>> {
    let items: Vec<PickItem> = Action::ALL
        .iter()
        .map(|a| PickItem::new(a.description(), a.id()))
        .collect();

    let picked = prompter.pick_one("Select action", &items).await?;
    Ok(picked.and_then(|i| Action::ALL.get(i).copied()))
}

fn print_actions(json: bool) -> Result<()> {
    if json {
        let infos: Vec<_> = Action::ALL.iter().map(Action::info).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Actions:");
    println!();
    for action in Action::ALL {
        println!(
            "  {:<18} {:<34} {}",
            action.command_name(),
            action.id(),
            action.description()
        );
    }
    Ok(())
}

fn show_config(config: &Config, config_path: &Path, init: bool) -> Result<()> {
    if init {
        config.save_to(config_path)?;
        println!("Configuration initialized at {:?}", config_path);
    } else {
        println!("Configuration:");
        println!("{}", toml::to_string_pretty(config)?);
        println!("\nConfig file: {:?}", config_path);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Err(e) = check_usage(&cli) {
        e.exit();
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()?,
    };

    // Load configuration
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {}", e);
        Config::default()
    });
    config.debug |= cli.debug;

    setup_logging(config.debug, config.log_file.as_deref())?;
    debug!("Starting {} v{}", APP_NAME, VERSION);

    match &cli.command {
        Some(Commands::Actions { json }) => return print_actions(*json),
        Some(Commands::Config { init }) => return show_config(&config, &config_path, *init),
        _ => {}
    }

    let prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(TerminalPrompter::new())
    };

    let action = match cli.command.as_ref().and_then(Commands::action) {
        Some(action) => action,
        None => match pick_action(prompter.as_ref()).await? {
            Some(action) => action,
            None => return Ok(()),
        },
    };

    let discovery = build_discovery(&cli, &config)?;
    let dispatcher = build_dispatcher(&cli, &config).await?;

    let runner = ActionRunner::new(discovery.as_ref(), prompter.as_ref(), dispatcher.as_ref())
        .with_defaults(ActionDefaults::from_config(&config));

    match runner.run(action).await? {
        ActionOutcome::Dispatched(invocation) => {
            debug!("Dispatched {} in {:?}", action, invocation.working_dir());
        }
        ActionOutcome::Aborted(reason) => {
            debug!("{} aborted: {:?}", action, reason);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands_match_catalog() {
        let cli = Cli::command();
        for action in Action::ALL {
            assert!(
                cli.find_subcommand(action.command_name()).is_some(),
                "missing subcommand {}",
                action.command_name()
            );
        }
    }

    #[test]
    fn test_run_parses_identifier() {
        let cli = Cli::try_parse_from([APP_NAME, "run", "aspnet.ef.addMigration"]).unwrap();
        assert_eq!(
            cli.command.as_ref().and_then(Commands::action),
            Some(Action::AddMigration)
        );
    }

    #[test]
    fn test_yes_requires_action() {
        let cli = Cli::try_parse_from([APP_NAME, "--yes"]).unwrap();
        let err = check_usage(&cli).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSubcommand);

        let cli = Cli::try_parse_from([APP_NAME, "--yes", "list-migrations"]).unwrap();
        assert!(check_usage(&cli).is_ok());

        let cli = Cli::try_parse_from([APP_NAME]).unwrap();
        assert!(check_usage(&cli).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([APP_NAME, "list-migrations", "--yes", "--dry-run"]).unwrap();
        assert!(cli.yes);
        assert!(cli.dry_run);
        assert_eq!(
            cli.command.as_ref().and_then(Commands::action),
            Some(Action::ListMigrations)
        );
    }
}
