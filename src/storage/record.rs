//! Flat-file record parsing
//!
//! One record per line, seven comma-separated fields:
//!
//! ```text
//! S,<serial>,<year>,<cylinders>,<fuel>,<hull>,<max depth>
//! F,<serial>,<year>,<cylinders>,<fuel>,<wing span>,<ordnance>
//! ```
//!
//! The tag is case-insensitive. Records are produced by
//! [`Vessel::to_record`](crate::Vessel::to_record).

use std::str::FromStr;

use crate::domain::{Engine, Ship, ValidationError};

const FIELD_COUNT: usize = 7;

/// Errors that can occur while parsing a single record.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    /// The line does not have exactly seven fields.
    #[error("expected {FIELD_COUNT} comma-separated fields, found {0}")]
    FieldCount(usize),

    /// The type tag is not `S` or `F`.
    #[error("unrecognised ship type '{0}': expected S or F")]
    Tag(String),

    /// A numeric field could not be parsed.
    #[error("invalid {field} '{value}': expected a number")]
    Number {
        /// The name of the field.
        field: &'static str,
        /// The raw text of the field.
        value: String,
    },

    /// The fields parsed but describe an invalid ship.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses one record into a ship.
///
/// # Errors
///
/// Returns a [`RecordError`] if the line is malformed or any field is out of
/// range.
pub fn parse_record(line: &str) -> Result<Ship, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    let &[tag, serial, year, cylinders, fuel, first, second] = fields.as_slice() else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let year = number("commission year", year)?;
    let engine = Engine::new(number("cylinder count", cylinders)?, fuel)?;

    let ship = match tag {
        "S" | "s" => Ship::submarine(serial, year, engine, first, number("max depth", second)?)?,
        "F" | "f" => Ship::fighter_jet(serial, year, engine, number("wing span", first)?, second)?,
        _ => return Err(RecordError::Tag(tag.to_string())),
    };
    Ok(ship)
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::Number {
        field,
        value: value.to_string(),
    })
}
