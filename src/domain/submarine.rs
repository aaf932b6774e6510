use std::{fmt, str::FromStr};

use super::{Engine, ValidationError, ship::Real};

/// Two depths closer than this are considered equal.
const TOLERANCE: f64 = 0.0001;

/// The material of a submarine's hull.
///
/// Parsing is case-insensitive; the canonical form is lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hull {
    /// Steel.
    Steel,
    /// Alloy.
    Alloy,
    /// Titanium.
    Titanium,
}

impl Hull {
    /// Every recognised hull, in menu order.
    pub const ALL: [Self; 3] = [Self::Steel, Self::Alloy, Self::Titanium];

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Alloy => "alloy",
            Self::Titanium => "titanium",
        }
    }
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hull {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hull| hull.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::Hull(s.to_string()))
    }
}

/// Submarine-specific attributes.
///
/// `max_depth` is a non-positive number of metres: `0.0` is the surface and
/// `-500.0` the deepest rating accepted.
#[derive(Debug, Clone)]
pub struct Submarine {
    hull: Hull,
    max_depth: f64,
}

impl Submarine {
    /// Deepest accepted rating.
    pub const DEEPEST: f64 = -500.0;
    /// Shallowest accepted rating.
    pub const SHALLOWEST: f64 = 0.0;

    /// Creates the payload from a hull name and a max depth.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Hull`] if `hull` is not steel, alloy or
    /// titanium, or [`ValidationError::MaxDepth`] if `max_depth` is outside
    /// `-500.0..=0.0`.
    pub fn new(hull: &str, max_depth: f64) -> Result<Self, ValidationError> {
        let hull = hull.parse()?;
        Ok(Self {
            hull,
            max_depth: validate_max_depth(max_depth)?,
        })
    }

    /// Returns the hull.
    #[must_use]
    pub const fn hull(&self) -> Hull {
        self.hull
    }

    /// Returns the max depth in metres.
    #[must_use]
    pub const fn max_depth(&self) -> f64 {
        self.max_depth
    }

    /// Sets the hull from its name, leaving the payload untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Hull`] if `hull` is not a recognised hull.
    pub fn set_hull(&mut self, hull: &str) -> Result<(), ValidationError> {
        self.hull = hull.parse()?;
        Ok(())
    }

    /// Sets the max depth, leaving the payload untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MaxDepth`] if `max_depth` is outside
    /// `-500.0..=0.0`.
    pub fn set_max_depth(&mut self, max_depth: f64) -> Result<(), ValidationError> {
        self.max_depth = validate_max_depth(max_depth)?;
        Ok(())
    }

    /// Unrounded hours to travel `distance`.
    ///
    /// The `10` offset keeps the divisor positive at the surface.
    pub(crate) fn hours(&self, engine: &Engine, distance: u32) -> f64 {
        (f64::from(distance) / f64::from(engine.cylinders())) * (1.0 / (10.0 - self.max_depth))
    }

    pub(crate) fn record_fields(&self) -> String {
        format!("{},{}", self.hull, Real(self.max_depth))
    }
}

/// Checks a max depth against `-500.0..=0.0`.
///
/// # Errors
///
/// Returns [`ValidationError::MaxDepth`] if `max_depth` is out of range.
pub fn validate_max_depth(max_depth: f64) -> Result<f64, ValidationError> {
    if (Submarine::DEEPEST..=Submarine::SHALLOWEST).contains(&max_depth) {
        Ok(max_depth)
    } else {
        Err(ValidationError::MaxDepth(max_depth))
    }
}

impl PartialEq for Submarine {
    fn eq(&self, other: &Self) -> bool {
        self.hull == other.hull && (self.max_depth - other.max_depth).abs() < TOLERANCE
    }
}

impl fmt::Display for Submarine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "It is a submarine with a {} hull and a max depth of {} meters.",
            self.hull,
            Real(self.max_depth)
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(-500.1, false; "below deepest")]
    #[test_case(-500.0, true; "deepest")]
    #[test_case(-250.0, true; "middle")]
    #[test_case(0.0, true; "surface")]
    #[test_case(0.1, false; "above surface")]
    #[test_case(f64::NAN, false; "not a number")]
    fn depth_bounds(depth: f64, valid: bool) {
        assert_eq!(Submarine::new("steel", depth).is_ok(), valid);
    }

    #[test_case("steel", Some(Hull::Steel))]
    #[test_case("ALLOY", Some(Hull::Alloy))]
    #[test_case("Titanium", Some(Hull::Titanium))]
    #[test_case("wood", None)]
    fn hull_is_case_insensitive(input: &str, expected: Option<Hull>) {
        assert_eq!(Submarine::new(input, -1.0).ok().map(|s| s.hull()), expected);
    }

    #[test]
    fn failed_updates_leave_payload_unchanged() {
        let mut submarine = Submarine::new("steel", -10.0).unwrap();

        assert_eq!(
            submarine.set_hull("paper"),
            Err(ValidationError::Hull("paper".to_string()))
        );
        assert_eq!(
            submarine.set_max_depth(-600.0),
            Err(ValidationError::MaxDepth(-600.0))
        );

        assert_eq!(submarine.hull(), Hull::Steel);
        assert!((submarine.max_depth() + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn depth_equality_is_tolerant() {
        let a = Submarine::new("steel", -100.0).unwrap();
        let b = Submarine::new("steel", -100.000_01).unwrap();
        let c = Submarine::new("steel", -100.01).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn record_fields() {
        let submarine = Submarine::new("Titanium", -42.5).unwrap();
        assert_eq!(submarine.record_fields(), "titanium,-42.5");
    }
}
