use std::path::{Path, PathBuf};

mod add;
mod check;
mod duplicates;
mod fastest;
mod list;
mod shell;
mod terminal;

use add::Add;
use check::Check;
use clap::ArgAction;
use duplicates::Duplicates;
use fastest::Fastest;
use fleet::{Class, Config, Fleet, LoadReport, Ship, storage};
use list::List;
use shell::Shell;

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "fleet.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (defaults to ./fleet.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command.unwrap_or(Command::Shell).run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Logs go to stderr so they never interleave with prompts or records.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Shell,

    /// Describe every ship in a record file
    List(List),

    /// Find the fastest ship for a travel distance
    Fastest(Fastest),

    /// Report ships that appear more than once
    Duplicates(Duplicates),

    /// Report every line of a record file that cannot be loaded
    Check(Check),

    /// Add a ship to a record file
    Add(Add),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Shell => Shell::new(config.clone()).run()?,
            Self::List(command) => command.run(config)?,
            Self::Fastest(command) => command.run(config)?,
            Self::Duplicates(command) => command.run(config)?,
            Self::Check(command) => command.run(config)?,
            Self::Add(command) => command.run(config)?,
        }
        Ok(())
    }
}

/// Resolve the configuration, falling back to defaults when no file exists.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path).map_err(|e| anyhow::anyhow!("{e}"));
    }

    let path = Path::new(DEFAULT_CONFIG);
    if path.exists() {
        Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
    } else {
        tracing::debug!("No {DEFAULT_CONFIG} found, using default configuration");
        Ok(Config::default())
    }
}

/// The record file a command operates on: the one given, or the configured
/// default.
fn record_file(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.unwrap_or_else(|| config.data_file().to_path_buf())
}

/// Load a record file into a fresh fleet.
fn open_fleet(path: &Path) -> anyhow::Result<(Fleet, LoadReport)> {
    let mut fleet = Fleet::new();
    let report = storage::load(&mut fleet, path)?;
    Ok((fleet, report))
}

/// Warns when a ship will not survive a save and reload.
///
/// Records are comma-separated, so an ordnance containing a comma is written
/// with an extra field and skipped the next time the file is loaded.
fn record_warning(ship: &Ship) -> Option<String> {
    match ship.class() {
        Class::FighterJet(jet) if jet.ordnance().contains(',') => Some(format!(
            "ordnance '{}' contains a comma; this ship will be skipped when the file is \
             loaded again",
            jet.ordnance()
        )),
        _ => None,
    }
}
