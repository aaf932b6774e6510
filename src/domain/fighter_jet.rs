use std::fmt;

use non_empty_string::NonEmptyString;

use super::{Engine, ValidationError, ship::Real};

/// Two wing spans closer than this are considered equal.
const TOLERANCE: f64 = 0.0001;

/// Fighter jet-specific attributes.
#[derive(Debug, Clone)]
pub struct FighterJet {
    wing_span: f64,
    ordnance: NonEmptyString,
}

impl FighterJet {
    /// Narrowest accepted wing span, in metres.
    pub const MIN_WING_SPAN: f64 = 2.20;
    /// Widest accepted wing span, in metres.
    pub const MAX_WING_SPAN: f64 = 25.6;

    /// Creates the payload from a wing span and an ordnance description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WingSpan`] if `wing_span` is outside
    /// `2.20..=25.6`, or [`ValidationError::Ordnance`] if `ordnance` is empty.
    pub fn new(wing_span: f64, ordnance: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            wing_span: validate_wing_span(wing_span)?,
            ordnance: validate_ordnance(ordnance)?,
        })
    }

    /// Returns the wing span in metres.
    #[must_use]
    pub const fn wing_span(&self) -> f64 {
        self.wing_span
    }

    /// Returns the ordnance description.
    #[must_use]
    pub fn ordnance(&self) -> &str {
        self.ordnance.as_str()
    }

    /// Sets the wing span, leaving the payload untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WingSpan`] if `wing_span` is outside
    /// `2.20..=25.6`.
    pub fn set_wing_span(&mut self, wing_span: f64) -> Result<(), ValidationError> {
        self.wing_span = validate_wing_span(wing_span)?;
        Ok(())
    }

    /// Sets the ordnance, leaving the payload untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Ordnance`] if `ordnance` is empty.
    pub fn set_ordnance(&mut self, ordnance: &str) -> Result<(), ValidationError> {
        self.ordnance = validate_ordnance(ordnance)?;
        Ok(())
    }

    /// Unrounded hours to travel `distance`.
    pub(crate) fn hours(&self, engine: &Engine, distance: u32) -> f64 {
        f64::from(distance) / (self.wing_span * f64::from(engine.cylinders()) * 150.0)
    }

    pub(crate) fn record_fields(&self) -> String {
        format!("{},{}", Real(self.wing_span), self.ordnance())
    }
}

/// Checks a wing span against `2.20..=25.6`.
///
/// # Errors
///
/// Returns [`ValidationError::WingSpan`] if `wing_span` is out of range.
pub fn validate_wing_span(wing_span: f64) -> Result<f64, ValidationError> {
    if (FighterJet::MIN_WING_SPAN..=FighterJet::MAX_WING_SPAN).contains(&wing_span) {
        Ok(wing_span)
    } else {
        Err(ValidationError::WingSpan(wing_span))
    }
}

/// Checks that an ordnance description is not empty.
///
/// # Errors
///
/// Returns [`ValidationError::Ordnance`] if `ordnance` is empty.
pub fn validate_ordnance(ordnance: &str) -> Result<NonEmptyString, ValidationError> {
    NonEmptyString::new(ordnance.to_string()).map_err(|_| ValidationError::Ordnance)
}

impl PartialEq for FighterJet {
    fn eq(&self, other: &Self) -> bool {
        (self.wing_span - other.wing_span).abs() < TOLERANCE && self.ordnance == other.ordnance
    }
}

impl fmt::Display for FighterJet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "It is a fighter jet with a wing span of {} meters and equipped with {}",
            Real(self.wing_span),
            self.ordnance()
        )
    }
}
