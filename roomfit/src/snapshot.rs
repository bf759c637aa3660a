//! Read-only room snapshots.
//!
//! A [`RoomSnapshot`] is the ordered list of rooms handed to the allocation
//! core for a single call. The scan order of the snapshot is the order the
//! combination solver considers rooms in, so it is preserved exactly as
//! loaded.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::room::RoomRecord;

/// An ordered, duplicate-free collection of room records.
///
/// # Examples
///
/// ```
/// use roomfit::{RoomRecord, RoomSnapshot};
///
/// let snapshot = RoomSnapshot::from_records(vec![
///     RoomRecord::new("R1", "Standard", 120.0).unwrap(),
///     RoomRecord::new("R2", "Deluxe", 450.0).unwrap(),
///     RoomRecord::new("R3", "Standard", 130.0).unwrap().with_available(false),
/// ]).unwrap();
///
/// assert_eq!(snapshot.len(), 3);
/// assert_eq!(snapshot.available_count("Standard"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomSnapshot {
    rooms: Vec<RoomRecord>,
}

impl RoomSnapshot {
    /// Builds a snapshot from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoom`] if an identifier appears twice, or a
    /// validation error if a price is negative or not finite.
    pub fn from_records(rooms: Vec<RoomRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rooms.len());
        for room in &rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(Error::DuplicateRoom {
                    id: room.id.to_string(),
                });
            }
            if !room.price_per_day.is_finite() || room.price_per_day < 0.0 {
                return Err(Error::validation(
                    format!("rooms[{}].pricePerDay", room.id),
                    format!("price must be a non-negative number, got {}", room.price_per_day),
                ));
            }
        }
        Ok(Self { rooms })
    }

    /// Parses a snapshot from the JSON array written by the room directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the records are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let rooms: Vec<RoomRecord> = serde_json::from_str(json)?;
        Self::from_records(rooms)
    }

    /// Loads a snapshot from a rooms file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid room list.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read rooms file: {e}"),
        })?;
        let snapshot = Self::from_json(&contents)?;
        log::debug!(
            "loaded {} room(s) from {}",
            snapshot.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Serializes the snapshot back into the rooms file format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rooms)?)
    }

    /// Writes the snapshot to `path` in the rooms file format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Borrowed view of the rooms in scan order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    /// Number of rooms in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the snapshot holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Counts available rooms with the given type tag.
    #[must_use]
    pub fn available_count(&self, room_type: &str) -> usize {
        self.rooms
            .iter()
            .filter(|r| r.is_available() && r.is_type(room_type))
            .count()
    }

    /// Returns the distinct type tags present, sorted.
    #[must_use]
    pub fn room_types(&self) -> BTreeSet<&str> {
        self.rooms.iter().map(|r| r.room_type.as_str()).collect()
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RoomRecord> {
        self.rooms.iter().find(|r| r.id.as_str() == id)
    }
}
