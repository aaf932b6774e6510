//! A bounded, insertion-ordered store of ships
//!
//! The [`Fleet`] knows nothing about the filesystem or the record format. It
//! owns an exclusive copy of every ship handed to it and answers the
//! fleet-wide queries: listing, duplicate detection and fastest-ship
//! selection.

use tracing::instrument;

use crate::domain::{Ship, Vessel, ship::Real};

/// The maximum number of ships a [`Fleet`] can hold.
pub const CAPACITY: usize = 30;

/// Returned when inserting into a full [`Fleet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Fleet is full: it already holds the maximum of {capacity} ships")]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    /// The capacity that was exceeded.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A fixed-capacity, ordered collection of ships.
///
/// The backing store always has [`CAPACITY`] slots; the first
/// [`count`](Self::count) are filled in insertion order and the rest are
/// empty. Ships are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    slots: Vec<Option<Ship>>,
    count: usize,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    /// Creates an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None; CAPACITY],
            count: 0,
        }
    }

    /// Appends an independent copy of `ship`.
    ///
    /// The caller keeps its own instance; later changes to it never reach the
    /// fleet.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the fleet already holds [`CAPACITY`]
    /// ships. The fleet is unchanged in that case.
    pub fn add(&mut self, ship: &Ship) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError { capacity: CAPACITY });
        }

        self.slots[self.count] = Some(ship.duplicate());
        self.count += 1;
        tracing::debug!(
            "Added {} {} ({}/{CAPACITY})",
            ship.class().name(),
            ship.serial_number(),
            self.count
        );
        Ok(())
    }

    /// Returns the number of stored ships.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no ships are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if no further ships can be added.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count >= CAPACITY
    }

    /// Iterates over the stored ships in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.slots[..self.count].iter().flatten()
    }

    /// Returns every slot of the backing store, filled or not.
    ///
    /// The result always has [`CAPACITY`] entries, with `None` after the
    /// first [`count`](Self::count). Bound any iteration by `count`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Option<&Ship>> {
        self.slots.iter().map(Option::as_ref).collect()
    }

    /// Finds the ship with the shortest travel time over `distance`.
    ///
    /// Ties go to the earliest-inserted ship. Returns `None` if the fleet is
    /// empty.
    #[must_use]
    pub fn fastest(&self, distance: u32) -> Option<(&Ship, f64)> {
        let mut best: Option<(&Ship, f64)> = None;
        for ship in self.iter() {
            let time = ship.travel_time(distance);
            if best.is_none_or(|(_, fastest)| time < fastest) {
                best = Some((ship, time));
            }
        }
        best
    }

    /// Describes the fastest ship over `distance` and its travel time.
    #[instrument(level = "debug", skip(self))]
    #[must_use]
    pub fn fastest_for(&self, distance: u32) -> String {
        self.fastest(distance).map_or_else(
            || "There are no ships in the ship storage".to_string(),
            |(ship, time)| format!("{ship} with a travel time of {} hours.", Real(time)),
        )
    }

    /// Returns the index pairs `(i, j)`, `i < j`, of equal ships.
    ///
    /// Every pair is checked, so a group of `k` equal ships yields `k * (k - 1)
    /// / 2` pairs.
    #[must_use]
    pub fn duplicate_pairs(&self) -> Vec<(usize, usize)> {
        let ships: Vec<&Ship> = self.iter().collect();
        let mut pairs = Vec::new();
        for (i, first) in ships.iter().enumerate() {
            for (j, second) in ships.iter().enumerate().skip(i + 1) {
                if first == second {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Reports duplicated ships, one line per equal pair.
    ///
    /// Each line is the description of the earlier ship of the pair. Returns
    /// an empty string if there are no duplicates.
    #[instrument(level = "debug", skip(self))]
    #[must_use]
    pub fn find_duplicates(&self) -> String {
        let ships: Vec<&Ship> = self.iter().collect();
        self.duplicate_pairs()
            .into_iter()
            .map(|(i, _)| format!("{}\n", ships[i]))
            .collect()
    }

    /// Describes every ship, one per line, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> String {
        self.iter().map(|ship| format!("{ship}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Engine;

    fn engine(cylinders: u32) -> Engine {
        Engine::new(cylinders, "diesel").unwrap()
    }

    fn submarine(serial: &str, depth: f64) -> Ship {
        Ship::submarine(serial, 2000, engine(10), "steel", depth).unwrap()
    }

    fn jet(serial: &str, wing_span: f64) -> Ship {
        Ship::fighter_jet(serial, 2010, engine(4), wing_span, "cannon").unwrap()
    }

    /// A fleet holding `n` distinct submarines.
    fn fleet_of(n: usize) -> Fleet {
        let mut fleet = Fleet::new();
        for i in 1..=n {
            fleet.add(&submarine(&format!("100.{i:03}"), -1.0)).unwrap();
        }
        fleet
    }

    #[test]
    fn starts_empty() {
        let fleet = Fleet::new();
        assert_eq!(fleet.count(), 0);
        assert!(fleet.is_empty());
        assert_eq!(fleet.list_all(), "");
        assert_eq!(fleet.find_duplicates(), "");
    }

    #[test]
    fn capacity_is_enforced() {
        let mut fleet = fleet_of(CAPACITY);
        assert_eq!(fleet.count(), 30);
        assert!(fleet.is_full());

        let err = fleet.add(&submarine("300.999", -1.0)).unwrap_err();
        assert_eq!(err.capacity(), 30);
        assert_eq!(fleet.count(), 30);
    }

    #[test]
    fn stores_an_independent_copy() {
        let mut fleet = Fleet::new();
        let mut ship = submarine("150.500", -100.0);
        fleet.add(&ship).unwrap();

        ship.set_commission_year(1999).unwrap();
        assert_eq!(fleet.iter().next().unwrap().commission_year(), 2000);
    }

    #[test]
    fn snapshot_is_padded_to_capacity() {
        let fleet = fleet_of(3);
        let snapshot = fleet.snapshot();

        assert_eq!(snapshot.len(), CAPACITY);
        assert!(snapshot[..3].iter().all(Option::is_some));
        assert!(snapshot[3..].iter().all(Option::is_none));
        assert_eq!(snapshot[1].unwrap().serial_number().to_string(), "100.002");
    }

    #[test]
    fn fastest_on_empty_fleet() {
        let fleet = Fleet::new();
        assert!(fleet.fastest(100).is_none());
        assert_eq!(fleet.fastest_for(100), "There are no ships in the ship storage");
    }

    #[test]
    fn fastest_picks_minimum() {
        let mut fleet = Fleet::new();
        fleet.add(&submarine("150.001", 0.0)).unwrap();
        fleet.add(&jet("150.002", 25.6)).unwrap();
        fleet.add(&submarine("150.003", -500.0)).unwrap();

        // 10.0, 0.07 and 0.2 hours respectively.
        let (ship, time) = fleet.fastest(1000).unwrap();
        assert_eq!(ship.serial_number().to_string(), "150.002");
        assert!((time - 0.07).abs() < 1e-9);
    }

    #[test]
    fn fastest_tie_keeps_first_inserted() {
        // Both take (1000 / 10) * (1 / 20) = 5.0 hours.
        let mut fleet = Fleet::new();
        fleet.add(&submarine("150.001", -10.0)).unwrap();
        fleet.add(&submarine("150.002", -10.0)).unwrap();

        let (ship, time) = fleet.fastest(1000).unwrap();
        assert_eq!(ship.serial_number().to_string(), "150.001");
        assert!((time - 5.0).abs() < f64::EPSILON);
        assert!(fleet.fastest_for(1000).ends_with("with a travel time of 5.0 hours."));
    }

    #[test]
    fn fastest_for_sentence() {
        let mut fleet = Fleet::new();
        fleet.add(&submarine("150.500", -100.0)).unwrap();

        let expected = format!(
            "{} with a travel time of 0.91 hours.",
            submarine("150.500", -100.0)
        );
        assert_eq!(fleet.fastest_for(1000), expected);
    }

    #[test]
    fn triple_duplicates_report_every_pair() {
        let mut fleet = Fleet::new();
        let ship = submarine("150.500", -100.0);
        fleet.add(&ship).unwrap();
        fleet.add(&jet("200.001", 10.0)).unwrap();
        fleet.add(&ship).unwrap();
        fleet.add(&ship).unwrap();

        assert_eq!(fleet.duplicate_pairs(), vec![(0, 2), (0, 3), (2, 3)]);

        let report = fleet.find_duplicates();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| *line == ship.to_string()));
    }

    #[test]
    fn same_fields_different_variant_are_not_duplicates() {
        let mut fleet = Fleet::new();
        fleet.add(&submarine("150.500", -1.0)).unwrap();
        fleet.add(&jet("150.500", 10.0)).unwrap();

        assert!(fleet.duplicate_pairs().is_empty());
    }

    #[test]
    fn list_all_in_insertion_order() {
        let mut fleet = Fleet::new();
        let first = jet("200.001", 10.0);
        let second = submarine("150.500", -1.0);
        fleet.add(&first).unwrap();
        fleet.add(&second).unwrap();

        assert_eq!(fleet.list_all(), format!("{first}\n{second}\n"));
        let serials: Vec<String> = fleet
            .iter()
            .map(|ship| ship.serial_number().to_string())
            .collect();
        assert_eq!(serials, ["200.001", "150.500"]);
    }
}
