//! Fleet register for submarines and fighter jets
//!
//! Ships are validated value types held in a bounded, insertion-ordered
//! [`Fleet`]. The fleet can be queried for duplicates and for the fastest ship
//! over a given distance, and persisted as a flat comma-separated record file.

pub mod domain;
pub use domain::{
    Class, Config, Engine, FighterJet, Fuel, Hull, SerialNumber, Ship, Submarine,
    ValidationError, Vessel,
};

/// The in-memory fleet and its flat-file persistence.
pub mod storage;
pub use storage::{CapacityError, Fleet, FileError, LoadReport, RecordError};
