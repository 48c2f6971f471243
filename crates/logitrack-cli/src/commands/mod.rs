//! CLI command definitions and dispatch.

pub mod check;
pub mod containers;
pub mod dashboard;
pub mod planning;
pub mod requests;
pub mod tui;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use logitrack_common::config::LogitrackConfig;
use logitrack_common::constants::CONFIG_ENV_VAR;
use logitrack_core::catalog::{Catalog, DanglingReferenceWarning};
use logitrack_core::planning::SlotCalendar;

/// LogiTrack — container-logistics operator dashboard.
#[derive(Parser, Debug)]
#[command(name = "logitrack", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Path to a JSON catalog. Overrides the configured one; the built-in
    /// sample catalog is used when neither is set.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show headline metrics and the status distribution.
    Dashboard(dashboard::DashboardArgs),
    /// List containers, optionally filtered by status and search text.
    Containers(containers::ContainersArgs),
    /// List client requests.
    Requests(requests::RequestsArgs),
    /// Show the slot-planning calendar.
    Planning(planning::PlanningArgs),
    /// Validate the catalog and report dangling references and slot conflicts.
    Check,
    /// Launch the interactive terminal dashboard.
    Tui,
}

/// Everything a command needs: the effective configuration and a validated
/// catalog.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration.
    pub config: LogitrackConfig,
    /// Catalog that passed validation.
    pub catalog: Catalog,
    /// Non-fatal findings from validation.
    pub warnings: Vec<DanglingReferenceWarning>,
}

impl Context {
    /// Planning calendar for the configured start, or the current week.
    pub fn calendar(&self) -> SlotCalendar {
        let start = self
            .config
            .calendar_start
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        SlotCalendar::sample(start)
    }
}

/// Loads configuration and catalog for the given global options.
///
/// # Errors
///
/// Returns an error if the configuration or catalog cannot be loaded, or the
/// catalog fails validation.
pub fn load_context(config: Option<&PathBuf>, catalog: Option<&PathBuf>) -> anyhow::Result<Context> {
    let config = match config {
        Some(path) => LogitrackConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => LogitrackConfig::default(),
    };

    let catalog_path = catalog.or(config.catalog_file.as_ref());
    let catalog = match catalog_path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => {
            tracing::debug!("using built-in sample catalog");
            Catalog::sample()
        }
    };
    let warnings = catalog.validate()?;

    Ok(Context {
        config,
        catalog,
        warnings,
    })
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let ctx = load_context(cli.config.as_ref(), cli.catalog.as_ref())?;
    match cli.command {
        Command::Dashboard(args) => dashboard::execute(&ctx, &args),
        Command::Containers(args) => containers::execute(&ctx, &args),
        Command::Requests(args) => requests::execute(&ctx, &args),
        Command::Planning(args) => planning::execute(&ctx, &args),
        Command::Check => check::execute(&ctx),
        Command::Tui => tui::execute(ctx),
    }
}
