use std::path::PathBuf;

use clap::Parser;
use fleet::Config;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Fastest {
    /// Record file to read (defaults to the configured data file)
    file: Option<PathBuf>,

    /// Distance to travel
    #[arg(short, long)]
    distance: u32,
}

impl Fastest {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = super::record_file(self.file, config);
        let (fleet, report) = super::open_fleet(&path)?;

        if !report.is_clean() {
            eprintln!(
                "{}",
                format!("⚠️  {} line(s) skipped", report.skipped.len()).warning()
            );
        }

        println!("{}", fleet.fastest_for(self.distance));
        Ok(())
    }
}
