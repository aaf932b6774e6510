use std::path::PathBuf;

use clap::Parser;
use fleet::{Config, Fleet};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Duplicates {
    /// Record file to read (defaults to the configured data file)
    file: Option<PathBuf>,
}

impl Duplicates {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = super::record_file(self.file, config);
        let (fleet, _) = super::open_fleet(&path)?;

        match report(&fleet) {
            Some(lines) => print!("{lines}"),
            None => println!("{}", "No duplicates found".success()),
        }
        Ok(())
    }
}

/// The duplicate report, or `None` when every ship is distinct.
pub(super) fn report(fleet: &Fleet) -> Option<String> {
    let lines = fleet.find_duplicates();
    (!lines.is_empty()).then_some(lines)
}
