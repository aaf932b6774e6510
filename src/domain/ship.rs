//! The ship entity
//!
//! A [`Ship`] carries the attributes every vessel shares (serial number,
//! commission year, engine) and a [`Class`] payload holding the
//! variant-specific attributes. Behaviour that differs per variant is reached
//! through the [`Vessel`] capability trait.

use std::{fmt, num::FpCategory};

use super::{Engine, FighterJet, SerialNumber, Submarine, ValidationError};

/// Earliest accepted commission year.
pub const MIN_YEAR: u32 = 1950;
/// Latest accepted commission year.
pub const MAX_YEAR: u32 = 2022;

/// Operations every kind of ship provides.
pub trait Vessel: Clone {
    /// Hours needed to travel `distance`, rounded to two decimal places.
    fn travel_time(&self, distance: u32) -> f64;

    /// The canonical flat-file record for this ship.
    fn to_record(&self) -> String;

    /// A human-readable sentence describing this ship.
    fn describe(&self) -> String;

    /// Returns an independent copy of the same concrete variant.
    #[must_use]
    fn duplicate(&self) -> Self {
        self.clone()
    }
}

/// The variant-specific part of a [`Ship`].
#[derive(Debug, Clone, PartialEq)]
pub enum Class {
    /// A submarine.
    Submarine(Submarine),
    /// A fighter jet.
    FighterJet(FighterJet),
}

impl Class {
    /// The single-character tag used in flat-file records.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Submarine(_) => 'S',
            Self::FighterJet(_) => 'F',
        }
    }

    /// A lower-case name for the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submarine(_) => "submarine",
            Self::FighterJet(_) => "fighter jet",
        }
    }
}

impl From<Submarine> for Class {
    fn from(submarine: Submarine) -> Self {
        Self::Submarine(submarine)
    }
}

impl From<FighterJet> for Class {
    fn from(jet: FighterJet) -> Self {
        Self::FighterJet(jet)
    }
}

/// A vessel in the fleet.
///
/// Every field is validated on construction and on each update; a `Ship` can
/// never hold an out-of-range value. Two ships are equal when they are the
/// same variant and every field matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    serial: SerialNumber,
    year: u32,
    engine: Engine,
    class: Class,
}

impl Ship {
    /// Creates a ship from its shared attributes and a variant payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Serial`] if `serial` is malformed, or
    /// [`ValidationError::Year`] if `year` is outside `1950..=2022`.
    pub fn new(
        serial: &str,
        year: u32,
        engine: Engine,
        class: impl Into<Class>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            serial: serial.parse()?,
            year: validate_year(year)?,
            engine,
            class: class.into(),
        })
    }

    /// Creates a submarine.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any shared or submarine attribute is
    /// out of range.
    pub fn submarine(
        serial: &str,
        year: u32,
        engine: Engine,
        hull: &str,
        max_depth: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(serial, year, engine, Submarine::new(hull, max_depth)?)
    }

    /// Creates a fighter jet.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any shared or fighter jet attribute is
    /// out of range.
    pub fn fighter_jet(
        serial: &str,
        year: u32,
        engine: Engine,
        wing_span: f64,
        ordnance: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(serial, year, engine, FighterJet::new(wing_span, ordnance)?)
    }

    /// Returns the serial number.
    #[must_use]
    pub const fn serial_number(&self) -> SerialNumber {
        self.serial
    }

    /// Returns the commission year.
    #[must_use]
    pub const fn commission_year(&self) -> u32 {
        self.year
    }

    /// Returns a copy of the engine.
    ///
    /// Changing the returned value never affects the ship.
    #[must_use]
    pub const fn engine(&self) -> Engine {
        self.engine
    }

    /// Returns the variant payload.
    #[must_use]
    pub const fn class(&self) -> &Class {
        &self.class
    }

    /// Returns the variant payload for in-place updates.
    ///
    /// Payload setters validate their input, so the ship stays valid.
    pub fn class_mut(&mut self) -> &mut Class {
        &mut self.class
    }

    /// Sets the serial number, leaving the ship untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Serial`] if `serial` is malformed.
    pub fn set_serial_number(&mut self, serial: &str) -> Result<(), ValidationError> {
        self.serial = serial.parse()?;
        Ok(())
    }

    /// Sets the commission year, leaving the ship untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Year`] if `year` is outside `1950..=2022`.
    pub fn set_commission_year(&mut self, year: u32) -> Result<(), ValidationError> {
        self.year = validate_year(year)?;
        Ok(())
    }

    /// Replaces the engine with a copy of `engine`.
    pub fn set_engine(&mut self, engine: Engine) {
        self.engine = engine;
    }
}

/// Checks a commission year against `1950..=2022`.
///
/// # Errors
///
/// Returns [`ValidationError::Year`] if `year` is out of range.
pub fn validate_year(year: u32) -> Result<u32, ValidationError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::Year(year))
    }
}

impl Vessel for Ship {
    fn travel_time(&self, distance: u32) -> f64 {
        let hours = match &self.class {
            Class::Submarine(submarine) => submarine.hours(&self.engine, distance),
            Class::FighterJet(jet) => jet.hours(&self.engine, distance),
        };
        round2(hours)
    }

    fn to_record(&self) -> String {
        let base = format!(
            "{},{},{},{}",
            self.serial,
            self.year,
            self.engine.cylinders(),
            self.engine.fuel()
        );
        let extra = match &self.class {
            Class::Submarine(submarine) => submarine.record_fields(),
            Class::FighterJet(jet) => jet.record_fields(),
        };
        format!("{},{base},{extra}", self.class.tag())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The ship {} was commissioned in {}, {}",
            self.serial, self.year, self.engine
        )?;
        match &self.class {
            Class::Submarine(submarine) => write!(f, " {submarine}"),
            Class::FighterJet(jet) => write!(f, " {jet}"),
        }
    }
}

/// Rounds to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a real number so whole values keep a trailing `.0`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Real(pub(crate) f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_finite() && self.0.fract().classify() == FpCategory::Zero {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
