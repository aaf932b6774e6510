use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fleet::{Class, Config, Fleet, Ship, Vessel};
use serde::Serialize;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `ships list`.
#[derive(Debug, Parser)]
pub struct List {
    /// Record file to read (defaults to the configured data file).
    file: Option<PathBuf>,

    /// Output format (default: text).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One descriptive sentence per ship.
    #[default]
    Text,
    /// Aligned columns.
    Table,
    /// A JSON array.
    Json,
    /// Flat-file records, as written by `save`.
    Records,
}

/// Serializable view of a ship.
#[derive(Debug, Serialize)]
struct ShipRow<'a> {
    kind: &'static str,
    serial: String,
    year: u32,
    cylinders: u32,
    fuel: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hull: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wing_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordnance: Option<&'a str>,
}

impl<'a> From<&'a Ship> for ShipRow<'a> {
    fn from(ship: &'a Ship) -> Self {
        let engine = ship.engine();
        let mut row = Self {
            kind: ship.class().name(),
            serial: ship.serial_number().to_string(),
            year: ship.commission_year(),
            cylinders: engine.cylinders(),
            fuel: engine.fuel().as_str(),
            hull: None,
            max_depth: None,
            wing_span: None,
            ordnance: None,
        };
        match ship.class() {
            Class::Submarine(submarine) => {
                row.hull = Some(submarine.hull().as_str());
                row.max_depth = Some(submarine.max_depth());
            }
            Class::FighterJet(jet) => {
                row.wing_span = Some(jet.wing_span());
                row.ordnance = Some(jet.ordnance());
            }
        }
        row
    }
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = super::record_file(self.file, config);
        let (fleet, report) = super::open_fleet(&path)?;

        if fleet.is_empty() {
            eprintln!("{}", format!("No ships in {}", path.display()).dim());
        } else {
            print!("{}", render(&fleet, self.output)?);
        }

        if !report.is_clean() {
            eprintln!(
                "{}",
                format!(
                    "⚠️  {} line(s) skipped; run `ships check` for details",
                    report.skipped.len()
                )
                .warning()
            );
        }
        Ok(())
    }
}

fn render(fleet: &Fleet, output: OutputFormat) -> anyhow::Result<String> {
    Ok(match output {
        OutputFormat::Text => fleet.list_all(),
        OutputFormat::Table => render_table(fleet),
        OutputFormat::Json => {
            let rows: Vec<ShipRow> = fleet.iter().map(ShipRow::from).collect();
            let mut json =
                serde_json::to_string_pretty(&rows).context("failed to render json output")?;
            json.push('\n');
            json
        }
        OutputFormat::Records => fleet
            .iter()
            .map(|ship| format!("{}\n", ship.to_record()))
            .collect(),
    })
}

fn render_table(fleet: &Fleet) -> String {
    const HEADERS: [&str; 6] = ["#", "TYPE", "SERIAL", "YEAR", "ENGINE", "DETAILS"];

    let data: Vec<[String; 6]> = fleet
        .iter()
        .enumerate()
        .map(|(i, ship)| {
            let engine = ship.engine();
            let details = match ship.class() {
                Class::Submarine(submarine) => {
                    format!("{} hull, {} m", submarine.hull(), submarine.max_depth())
                }
                Class::FighterJet(jet) => {
                    format!("{} m span, {}", jet.wing_span(), jet.ordnance())
                }
            };
            [
                (i + 1).to_string(),
                ship.class().name().to_string(),
                ship.serial_number().to_string(),
                ship.commission_year().to_string(),
                format!("{}x {}", engine.cylinders(), engine.fuel()),
                details,
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|col| {
            data.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(HEADERS[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = format_row(&HEADERS, &widths);
    out.push_str(&format_row(&rules, &widths));
    for row in &data {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}
