//! Domain models for the fleet register.
//!
//! This module contains the validated value types: engines, serial numbers,
//! ships and their variant payloads, plus the application configuration.

/// Propulsion units.
pub mod engine;
pub use engine::{Engine, Fuel};

mod config;
pub use config::Config;

mod error;
pub use error::ValidationError;

/// Serial number parsing and validation.
pub mod serial;
pub use serial::SerialNumber;

/// The ship entity and its shared behaviour.
pub mod ship;
pub use ship::{Class, Ship, Vessel};

/// Submarine payload.
pub mod submarine;
pub use submarine::{Hull, Submarine};

/// Fighter jet payload.
pub mod fighter_jet;
pub use fighter_jet::FighterJet;
