//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for snapshots and stay options.

use std::path::PathBuf;

use roomfit::{RoomRecord, RoomSnapshot, StayOption};

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for small hand-written snapshots.
///
/// Room ids are assigned in insertion order as `R1`, `R2`, ...
#[allow(dead_code)]
#[derive(Default)]
pub struct SnapshotFixture {
    rooms: Vec<RoomRecord>,
}

#[allow(dead_code)]
impl SnapshotFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` available rooms of a type at a price.
    pub fn with_rooms(mut self, room_type: &str, count: usize, price: f64) -> Self {
        for _ in 0..count {
            let id = format!("R{}", self.rooms.len() + 1);
            self.rooms.push(RoomRecord::new(id, room_type, price).unwrap());
        }
        self
    }

    /// Adds a single unavailable room.
    pub fn with_unavailable(mut self, room_type: &str, price: f64) -> Self {
        let id = format!("R{}", self.rooms.len() + 1);
        self.rooms
            .push(RoomRecord::new(id, room_type, price).unwrap().with_available(false));
        self
    }

    /// Returns the raw records.
    pub fn records(self) -> Vec<RoomRecord> {
        self.rooms
    }

    /// Builds a validated snapshot.
    pub fn build(self) -> RoomSnapshot {
        RoomSnapshot::from_records(self.rooms).unwrap()
    }
}

/// Builds stay options from `(id, price, max_days)` triples.
#[allow(dead_code)]
pub fn options(specs: &[(&str, f64, u32)]) -> Vec<StayOption> {
    specs
        .iter()
        .map(|&(id, price, max_days)| StayOption::new(id, "Standard", price, max_days).unwrap())
        .collect()
}

/// Path to a file inside a temp dir.
#[allow(dead_code)]
pub fn temp_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
