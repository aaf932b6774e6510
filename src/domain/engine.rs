use std::{fmt, str::FromStr};

use super::ValidationError;

/// The kind of fuel an [`Engine`] runs on.
///
/// Parsing is case-insensitive; the canonical form is lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
    /// Electric battery.
    Battery,
    /// Diesel.
    Diesel,
    /// Biofuel.
    Bio,
}

impl Fuel {
    /// Every recognised fuel, in menu order.
    pub const ALL: [Self; 3] = [Self::Battery, Self::Diesel, Self::Bio];

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Diesel => "diesel",
            Self::Bio => "bio",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fuel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::Fuel(s.to_string()))
    }
}

/// A propulsion unit: a cylinder count and the fuel it burns.
///
/// `Engine` is a plain value. It is `Copy`, so every hand-off to or from a
/// [`Ship`](super::Ship) produces an independent copy and no two owners can
/// ever observe each other's mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Engine {
    cylinders: u32,
    fuel: Fuel,
}

impl Engine {
    /// Smallest accepted cylinder count.
    pub const MIN_CYLINDERS: u32 = 2;
    /// Largest accepted cylinder count.
    pub const MAX_CYLINDERS: u32 = 20;

    /// Creates an engine from a cylinder count and a fuel name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Cylinders`] if `cylinders` is outside
    /// `2..=20`, or [`ValidationError::Fuel`] if `fuel` is not battery, diesel
    /// or bio (in any case).
    pub fn new(cylinders: u32, fuel: &str) -> Result<Self, ValidationError> {
        let cylinders = validate_cylinders(cylinders)?;
        let fuel = fuel.parse()?;
        Ok(Self { cylinders, fuel })
    }

    /// Creates an engine from an already-parsed fuel.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Cylinders`] if `cylinders` is outside
    /// `2..=20`.
    pub fn with_fuel(cylinders: u32, fuel: Fuel) -> Result<Self, ValidationError> {
        Ok(Self {
            cylinders: validate_cylinders(cylinders)?,
            fuel,
        })
    }

    /// Returns the number of cylinders.
    #[must_use]
    pub const fn cylinders(&self) -> u32 {
        self.cylinders
    }

    /// Returns the fuel.
    #[must_use]
    pub const fn fuel(&self) -> Fuel {
        self.fuel
    }

    /// Sets the cylinder count, leaving the engine untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Cylinders`] if `cylinders` is outside
    /// `2..=20`.
    pub fn set_cylinders(&mut self, cylinders: u32) -> Result<(), ValidationError> {
        self.cylinders = validate_cylinders(cylinders)?;
        Ok(())
    }

    /// Sets the fuel from its name, leaving the engine untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Fuel`] if `fuel` is not a recognised fuel.
    pub fn set_fuel(&mut self, fuel: &str) -> Result<(), ValidationError> {
        self.fuel = fuel.parse()?;
        Ok(())
    }
}

/// Checks a cylinder count against `2..=20`.
///
/// # Errors
///
/// Returns [`ValidationError::Cylinders`] if `cylinders` is out of range.
pub fn validate_cylinders(cylinders: u32) -> Result<u32, ValidationError> {
    if (Engine::MIN_CYLINDERS..=Engine::MAX_CYLINDERS).contains(&cylinders) {
        Ok(cylinders)
    } else {
        Err(ValidationError::Cylinders(cylinders))
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "it's engine has {} cylinders and runs on {} fuel.",
            self.cylinders, self.fuel
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(1, false; "below minimum")]
    #[test_case(2, true; "minimum")]
    #[test_case(10, true; "middle")]
    #[test_case(20, true; "maximum")]
    #[test_case(21, false; "above maximum")]
    #[test_case(0, false; "zero")]
    fn cylinder_bounds(cylinders: u32, valid: bool) {
        assert_eq!(Engine::new(cylinders, "diesel").is_ok(), valid);

        let mut engine = Engine::new(4, "diesel").unwrap();
        assert_eq!(engine.set_cylinders(cylinders).is_ok(), valid);
        let expected = if valid { cylinders } else { 4 };
        assert_eq!(engine.cylinders(), expected);
    }

    #[test_case("battery", Some(Fuel::Battery))]
    #[test_case("DIESEL", Some(Fuel::Diesel))]
    #[test_case("Bio", Some(Fuel::Bio))]
    #[test_case("petrol", None)]
    #[test_case("", None)]
    #[test_case(" bio", None; "leading whitespace")]
    fn fuel_is_case_insensitive(input: &str, expected: Option<Fuel>) {
        assert_eq!(Engine::new(6, input).ok().map(|e| e.fuel()), expected);
    }

    #[test]
    fn fuel_is_stored_lower_case() {
        let engine = Engine::new(6, "BaTtErY").unwrap();
        assert_eq!(engine.fuel().to_string(), "battery");
    }

    #[test]
    fn failed_fuel_update_leaves_engine_unchanged() {
        let mut engine = Engine::new(6, "bio").unwrap();
        let err = engine.set_fuel("coal").unwrap_err();

        assert_eq!(err, ValidationError::Fuel("coal".to_string()));
        assert_eq!(engine, Engine::new(6, "bio").unwrap());
    }

    #[test]
    fn copies_are_independent() {
        let original = Engine::new(8, "diesel").unwrap();
        let mut copy = original;
        copy.set_cylinders(12).unwrap();

        assert_eq!(original.cylinders(), 8);
        assert_ne!(original, copy);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Engine::new(8, "Diesel").unwrap(),
            Engine::new(8, "diesel").unwrap()
        );
        assert_ne!(
            Engine::new(8, "diesel").unwrap(),
            Engine::new(8, "bio").unwrap()
        );
    }

    #[test]
    fn description() {
        let engine = Engine::new(10, "diesel").unwrap();
        assert_eq!(
            engine.to_string(),
            "it's engine has 10 cylinders and runs on diesel fuel."
        );
    }
}
