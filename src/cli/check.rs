use std::path::PathBuf;

use clap::Parser;
use fleet::Config;
use tracing::instrument;

use super::terminal::Colorize;

/// Report every line of a record file that cannot be loaded.
///
/// Exits with an error if any line is skipped.
#[derive(Debug, Parser)]
pub struct Check {
    /// Record file to read (defaults to the configured data file)
    file: Option<PathBuf>,
}

impl Check {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = super::record_file(self.file, config);
        let (_, report) = super::open_fleet(&path)?;

        if report.is_clean() {
            println!(
                "{}",
                format!("✅ {}: {} ship(s), no problems", path.display(), report.loaded)
                    .success()
            );
            return Ok(());
        }

        for skipped in &report.skipped {
            println!(
                "{} {}",
                format!("{}:{}:", path.display(), skipped.line).warning(),
                skipped.reason
            );
            println!("    {}", skipped.text.dim());
        }

        anyhow::bail!(
            "{} line(s) of {} could not be loaded",
            report.skipped.len(),
            path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(path: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.set_data_file(path);
        config
    }

    #[test]
    fn clean_file_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        std::fs::write(&path, "S,150.500,2000,10,diesel,steel,-100.0\n").unwrap();

        Check { file: None }.run(&config_for(&path)).unwrap();
    }

    #[test]
    fn invalid_line_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        std::fs::write(
            &path,
            "S,150.500,2000,10,diesel,steel,-100.0\nF,150.500,2000,10,diesel,1.0,guns\n",
        )
        .unwrap();

        let err = Check { file: Some(path) }
            .run(&Config::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("1 line(s)"));
    }

    #[test]
    fn missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = Check {
            file: Some(tmp.path().join("absent.csv")),
        }
        .run(&Config::default());
        assert!(result.is_err());
    }
}
