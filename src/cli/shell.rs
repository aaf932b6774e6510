//! The interactive menu
//!
//! Every prompt re-asks until its input passes the same validator the domain
//! types use, so the shell only ever constructs valid ships.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use dialoguer::{Input, Select};
use fleet::{
    Config, Engine, Fleet, Fuel, Hull, SerialNumber, Ship,
    domain::{engine, fighter_jet, ship, submarine},
    storage,
};
use tracing::instrument;

use super::terminal::Colorize;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    AddShips,
    DestinationCheck,
    FindDuplicates,
    ViewShips,
    LoadShips,
    SaveShips,
    Exit,
}

impl MenuItem {
    const ALL: [Self; 7] = [
        Self::AddShips,
        Self::DestinationCheck,
        Self::FindDuplicates,
        Self::ViewShips,
        Self::LoadShips,
        Self::SaveShips,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::AddShips => "Add Ships",
            Self::DestinationCheck => "Destination Check",
            Self::FindDuplicates => "Find Duplicates",
            Self::ViewShips => "View Ships",
            Self::LoadShips => "Load Ships",
            Self::SaveShips => "Save Ships",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of ship to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Submarine,
    FighterJet,
}

impl Kind {
    const ALL: [Self; 2] = [Self::Submarine, Self::FighterJet];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Submarine => "Submarine",
            Self::FighterJet => "Fighter Jet",
        })
    }
}

#[derive(Debug)]
pub struct Shell {
    fleet: Fleet,
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            fleet: Fleet::new(),
            config,
        }
    }

    #[instrument(skip(self))]
    pub fn run(mut self) -> anyhow::Result<()> {
        if self.config.load_on_start {
            let path = self.config.data_file().to_path_buf();
            println!("{}", self.load(&path));
        }

        loop {
            let choice = Select::new()
                .with_prompt("Select an option")
                .items(&MenuItem::ALL)
                .default(0)
                .interact()?;

            match MenuItem::ALL[choice] {
                MenuItem::AddShips => self.add_ship()?,
                MenuItem::DestinationCheck => {
                    let distance = Input::<u32>::new()
                        .with_prompt("Enter the travel distance")
                        .interact_text()?;
                    println!("{}", self.fleet.fastest_for(distance));
                }
                MenuItem::FindDuplicates => println!("{}", self.duplicates()),
                MenuItem::ViewShips => print!("{}", self.fleet.list_all()),
                MenuItem::LoadShips => {
                    let path = self.prompt_path()?;
                    println!("{}", self.load(&path));
                }
                MenuItem::SaveShips => {
                    let path = self.prompt_path()?;
                    println!("{}", self.save(&path));
                }
                MenuItem::Exit => break,
            }
        }

        if let Some(message) = self.exit() {
            println!("{message}");
        }
        println!("Good bye!");
        Ok(())
    }

    fn add_ship(&mut self) -> anyhow::Result<()> {
        if self.fleet.is_full() {
            println!(
                "{}",
                format!(
                    "⚠️  The fleet is full ({} ships); no more ships can be added",
                    self.fleet.count()
                )
                .warning()
            );
            return Ok(());
        }

        let kind = Kind::ALL[Select::new()
            .with_prompt("Pick a ship you want to create")
            .items(&Kind::ALL)
            .default(0)
            .interact()?];

        let serial: String = Input::new()
            .with_prompt("Serial number (XXX.YYY, XXX in 100-300, YYY in 1-999)")
            .validate_with(|input: &String| check_serial(input))
            .interact_text()?;

        let year: u32 = Input::new()
            .with_prompt("Commission year (1950-2022)")
            .validate_with(|year: &u32| ship::validate_year(*year).map(drop))
            .interact_text()?;

        let cylinders: u32 = Input::new()
            .with_prompt("Number of cylinders (2-20)")
            .validate_with(|cylinders: &u32| engine::validate_cylinders(*cylinders).map(drop))
            .interact_text()?;

        let fuel = Fuel::ALL[Select::new()
            .with_prompt("Fuel type")
            .items(&Fuel::ALL)
            .default(0)
            .interact()?];

        let engine = Engine::with_fuel(cylinders, fuel)?;

        let ship = match kind {
            Kind::Submarine => {
                let hull = Hull::ALL[Select::new()
                    .with_prompt("Hull type")
                    .items(&Hull::ALL)
                    .default(0)
                    .interact()?];

                let max_depth: f64 = Input::new()
                    .with_prompt("Max depth (-500.0 to 0.0)")
                    .validate_with(|depth: &f64| submarine::validate_max_depth(*depth).map(drop))
                    .interact_text()?;

                Ship::submarine(&serial, year, engine, hull.as_str(), max_depth)?
            }
            Kind::FighterJet => {
                let wing_span: f64 = Input::new()
                    .with_prompt("Wing span (2.20 to 25.6)")
                    .validate_with(|span: &f64| fighter_jet::validate_wing_span(*span).map(drop))
                    .interact_text()?;

                let ordnance: String = Input::new()
                    .with_prompt("Ordnance")
                    .validate_with(|input: &String| {
                        fighter_jet::validate_ordnance(input).map(drop)
                    })
                    .interact_text()?;

                Ship::fighter_jet(&serial, year, engine, wing_span, &ordnance)?
            }
        };

        if let Some(warning) = super::record_warning(&ship) {
            println!("{}", format!("⚠️  {warning}").warning());
        }
        println!("{}", self.insert(&ship));
        Ok(())
    }

    fn prompt_path(&self) -> anyhow::Result<PathBuf> {
        let name: String = Input::new()
            .with_prompt("Enter a file name")
            .default(self.config.data_file().display().to_string())
            .interact_text()?;
        Ok(PathBuf::from(name))
    }

    /// Adds `ship` and returns the message to show.
    fn insert(&mut self, ship: &Ship) -> String {
        match self.fleet.add(ship) {
            Ok(()) => format!(
                "✅ Added {} {} ({} ship(s))",
                ship.class().name(),
                ship.serial_number(),
                self.fleet.count()
            )
            .success(),
            Err(e) => format!("⚠️  {e}").warning(),
        }
    }

    fn duplicates(&self) -> String {
        let report = self.fleet.find_duplicates();
        if report.is_empty() {
            "No duplicates found".dim()
        } else {
            report.trim_end().to_string()
        }
    }

    /// Bulk-loads `path` into the fleet and returns the message to show.
    ///
    /// Failures are reported rather than returned so the menu keeps running.
    fn load(&mut self, path: &Path) -> String {
        match storage::load(&mut self.fleet, path) {
            Ok(report) => {
                let mut message = format!(
                    "Loaded {} ship(s) from {}",
                    report.loaded,
                    path.display()
                )
                .success();
                for skipped in &report.skipped {
                    message.push('\n');
                    message.push_str(
                        &format!("⚠️  line {}: {}", skipped.line, skipped.reason).warning(),
                    );
                }
                message
            }
            Err(e) => format!("⚠️  {e}").warning(),
        }
    }

    /// Writes the fleet to `path` and returns the message to show.
    fn save(&self, path: &Path) -> String {
        match storage::save(&self.fleet, path) {
            Ok(count) => format!("Saved {count} ship(s) to {}", path.display()).success(),
            Err(e) => format!("⚠️  {e}").warning(),
        }
    }

    /// Applies `save_on_exit`, returning the save message if one was made.
    fn exit(&self) -> Option<String> {
        self.config
            .save_on_exit
            .then(|| self.save(self.config.data_file()))
    }
}

/// Validates a serial number the way [`Ship`] construction does.
fn check_serial(input: &str) -> Result<(), fleet::ValidationError> {
    input.parse::<SerialNumber>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use fleet::{Vessel as _, storage::CAPACITY};
    use test_case::test_case;

    use super::*;

    fn shell_with_data_file(path: &std::path::Path) -> Shell {
        let mut config = Config::default();
        config.set_data_file(path);
        Shell::new(config)
    }

    fn sample_ship(serial: &str) -> Ship {
        Ship::submarine(serial, 2000, Engine::new(10, "diesel").unwrap(), "steel", -100.0)
            .unwrap()
    }

    #[test]
    fn menu_lists_every_option_in_order() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            [
                "Add Ships",
                "Destination Check",
                "Find Duplicates",
                "View Ships",
                "Load Ships",
                "Save Ships",
                "Exit"
            ]
        );
    }

    #[test_case("150.500" => true)]
    #[test_case("100.001" => true)]
    #[test_case("99.500" => false)]
    #[test_case("301.500" => false)]
    #[test_case("150.000" => false)]
    #[test_case("" => false)]
    fn serial_prompt_validation(input: &str) -> bool {
        check_serial(input).is_ok()
    }

    #[test]
    fn insert_reports_full_fleet() {
        let mut shell = Shell::new(Config::default());
        for i in 1..=CAPACITY {
            shell.insert(&sample_ship(&format!("100.{i:03}")));
        }

        let message = shell.insert(&sample_ship("150.500"));
        assert!(message.contains("Fleet is full"));
        assert_eq!(shell.fleet.count(), CAPACITY);
    }

    #[test]
    fn duplicates_message_when_none() {
        let mut shell = Shell::new(Config::default());
        shell.insert(&sample_ship("150.500"));
        assert!(shell.duplicates().contains("No duplicates found"));

        shell.insert(&sample_ship("150.500"));
        assert_eq!(shell.duplicates(), sample_ship("150.500").describe());
    }

    #[test]
    fn save_then_load_through_shell() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");

        let mut shell = shell_with_data_file(&path);
        shell.insert(&sample_ship("150.500"));
        assert!(shell.save(&path).contains("Saved 1 ship(s)"));

        let mut other = shell_with_data_file(&path);
        assert!(other.load(&path).contains("Loaded 1 ship(s)"));
        assert_eq!(other.fleet, shell.fleet);
    }

    #[test]
    fn load_reports_missing_file_and_keeps_fleet() {
        let tmp = tempfile::tempdir().unwrap();
        let mut shell = Shell::new(Config::default());
        shell.insert(&sample_ship("150.500"));

        let message = shell.load(&tmp.path().join("absent.csv"));

        assert!(message.contains("failed to read"));
        assert_eq!(shell.fleet.count(), 1);
    }

    #[test]
    fn load_reports_skipped_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");
        std::fs::write(&path, "S,150.500,2000,10,diesel,steel,-100.0\nbogus\n").unwrap();

        let mut shell = Shell::new(Config::default());
        let message = shell.load(&path);

        assert!(message.contains("Loaded 1 ship(s)"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn exit_saves_only_when_configured() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ships.csv");

        let mut shell = shell_with_data_file(&path);
        shell.insert(&sample_ship("150.500"));
        assert_eq!(shell.exit(), None);
        assert!(!path.exists());

        shell.config.save_on_exit = true;
        assert!(shell.exit().is_some());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "S,150.500,2000,10,diesel,steel,-100.0\n"
        );
    }
}
