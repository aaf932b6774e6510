use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fleet::{Config, Engine, Fleet, Ship, storage};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Add {
    /// Record file to update (defaults to the configured data file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    ship: ShipArgs,
}

/// Attributes shared by every kind of ship.
#[derive(Debug, Args)]
struct Common {
    /// Serial number, in the form XXX.YYY
    #[arg(long)]
    serial: String,

    /// Commission year (1950-2022)
    #[arg(long)]
    year: u32,

    /// Engine cylinder count (2-20)
    #[arg(long)]
    cylinders: u32,

    /// Engine fuel: battery, diesel or bio
    #[arg(long)]
    fuel: String,
}

#[derive(Debug, Subcommand)]
enum ShipArgs {
    /// Add a submarine
    Submarine {
        #[command(flatten)]
        common: Common,

        /// Hull material: steel, alloy or titanium
        #[arg(long)]
        hull: String,

        /// Maximum depth in metres (-500.0 to 0.0)
        #[arg(long, allow_negative_numbers = true)]
        max_depth: f64,
    },

    /// Add a fighter jet
    FighterJet {
        #[command(flatten)]
        common: Common,

        /// Wing span in metres (2.20 to 25.6)
        #[arg(long)]
        wing_span: f64,

        /// Ordnance carried
        #[arg(long)]
        ordnance: String,
    },
}

impl ShipArgs {
    fn build(&self) -> anyhow::Result<Ship> {
        let ship = match self {
            Self::Submarine {
                common,
                hull,
                max_depth,
            } => Ship::submarine(
                &common.serial,
                common.year,
                common.engine()?,
                hull,
                *max_depth,
            )?,
            Self::FighterJet {
                common,
                wing_span,
                ordnance,
            } => Ship::fighter_jet(
                &common.serial,
                common.year,
                common.engine()?,
                *wing_span,
                ordnance,
            )?,
        };
        Ok(ship)
    }
}

impl Common {
    fn engine(&self) -> anyhow::Result<Engine> {
        Ok(Engine::new(self.cylinders, &self.fuel)?)
    }
}

impl Add {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = super::record_file(self.file, config);
        let ship = self.ship.build()?;

        // A missing file is created; a damaged one is left alone so that
        // skipped lines are not silently dropped on save.
        let mut fleet = if path.exists() {
            let (fleet, report) = super::open_fleet(&path)?;
            if !report.is_clean() {
                anyhow::bail!(
                    "{} has {} line(s) that cannot be loaded; run `ships check` first",
                    path.display(),
                    report.skipped.len()
                );
            }
            fleet
        } else {
            Fleet::new()
        };

        fleet.add(&ship)?;
        storage::save(&fleet, &path)?;

        if let Some(warning) = super::record_warning(&ship) {
            eprintln!("{}", format!("⚠️  {warning}").warning());
        }

        println!(
            "{}",
            format!(
                "✅ Added {} {} to {} ({} ship(s))",
                ship.class().name(),
                ship.serial_number(),
                path.display(),
                fleet.count()
            )
            .success()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fleet::storage::CAPACITY;

    use super::*;

    fn common(serial: &str) -> Common {
        Common {
            serial: serial.to_string(),
            year: 2000,
            cylinders: 10,
            fuel: "diesel".to_string(),
        }
    }

    fn submarine(serial: &str) -> ShipArgs {
        ShipArgs::Submarine {
            common: common(serial),
            hull: "steel".to_string(),
            max_depth: -100.0,
        }
    }

    #[test]
    fn add_creates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");

        Add {
            file: Some(path.clone()),
            ship: submarine("150.500"),
        }
        .run(&Config::default())
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "S,150.500,2000,10,diesel,steel,-100.0\n"
        );
    }

    #[test]
    fn add_appends_to_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        std::fs::write(&path, "S,150.500,2000,10,diesel,steel,-100.0\n").unwrap();

        Add {
            file: Some(path.clone()),
            ship: ShipArgs::FighterJet {
                common: common("200.010"),
                wing_span: 12.5,
                ordnance: "missiles".to_string(),
            },
        }
        .run(&Config::default())
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "S,150.500,2000,10,diesel,steel,-100.0\nF,200.010,2000,10,diesel,12.5,missiles\n"
        );
    }

    #[test]
    fn invalid_ship_leaves_file_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");

        let result = Add {
            file: Some(path.clone()),
            ship: submarine("99.500"),
        }
        .run(&Config::default());

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn damaged_file_is_not_rewritten() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        std::fs::write(&path, "garbage\n").unwrap();

        let result = Add {
            file: Some(path.clone()),
            ship: submarine("150.500"),
        }
        .run(&Config::default());

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage\n");
    }

    #[test]
    fn full_file_rejects_another_ship() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        let records: String = (1..=CAPACITY)
            .map(|i| format!("S,100.{i:03},2000,10,diesel,steel,-1.0\n"))
            .collect();
        std::fs::write(&path, &records).unwrap();

        let err = Add {
            file: Some(path.clone()),
            ship: submarine("150.500"),
        }
        .run(&Config::default())
        .unwrap_err();

        assert!(err.to_string().starts_with("Fleet is full"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), records);
    }
}
