//! Room identifier and room record types.
//!
//! A [`RoomRecord`] is the read-only view of a room that the allocation
//! core consumes. Records are owned by a [`RoomSnapshot`](crate::RoomSnapshot)
//! and only ever borrowed by the solver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated room identifier.
///
/// Identifiers are trimmed and must be non-empty.
///
/// # Examples
///
/// ```
/// use roomfit::RoomId;
///
/// let id = RoomId::try_from(" R101 ").unwrap();
/// assert_eq!(id.as_str(), "R101");
///
/// assert!(RoomId::try_from("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Maximum accepted identifier length in bytes.
    pub const MAX_LEN: usize = 64;

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = InvalidRoomIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(InvalidRoomIdError {
                value,
                reason: "room id cannot be empty".into(),
            });
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(InvalidRoomIdError {
                value,
                reason: format!("room id cannot exceed {} bytes", Self::MAX_LEN),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<&str> for RoomId {
    type Error = InvalidRoomIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for invalid room identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomIdError {
    /// The rejected value.
    pub value: String,
    /// The reason the value was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidRoomIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomIdError {}

impl From<InvalidRoomIdError> for crate::Error {
    fn from(err: InvalidRoomIdError) -> Self {
        Self::InvalidRoomId {
            value: err.value,
            reason: err.reason,
        }
    }
}

/// A single room as published by the room directory.
///
/// The serialized field names follow the rooms file written by the room
/// directory (`roomId`, `roomType`, `pricePerDay`, `isAvailable`). Extra
/// fields in that file, such as the attached service list, are ignored.
///
/// # Examples
///
/// ```
/// use roomfit::RoomRecord;
///
/// let room = RoomRecord::new("R101", "Deluxe", 450.0).unwrap();
/// assert!(room.is_available());
/// assert!(room.is_type("Deluxe"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    /// Unique identifier.
    #[serde(rename = "roomId")]
    pub id: RoomId,
    /// Category tag, e.g. `Standard` or `Deluxe`.
    pub room_type: String,
    /// Nightly price.
    pub price_per_day: f64,
    /// Whether the room can be handed out.
    #[serde(rename = "isAvailable", default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

impl RoomRecord {
    /// Creates an available room.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a valid [`RoomId`].
    pub fn new(
        id: impl Into<String>,
        room_type: impl Into<String>,
        price_per_day: f64,
    ) -> crate::Result<Self> {
        Ok(Self {
            id: RoomId::try_from(id.into())?,
            room_type: room_type.into(),
            price_per_day,
            available: true,
        })
    }

    /// Returns a copy of this record with the availability flag replaced.
    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Returns `true` if the room may be handed out.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns `true` if the room's type tag equals `room_type` exactly.
    #[must_use]
    pub fn is_type(&self, room_type: &str) -> bool {
        self.room_type == room_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_trims() {
        let id = RoomId::try_from("  R001\t").unwrap();
        assert_eq!(id.as_str(), "R001");
        assert_eq!(id.to_string(), "R001");
    }

    #[test]
    fn test_room_id_rejects_empty() {
        let err = RoomId::try_from("").unwrap_err();
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn test_room_id_rejects_too_long() {
        let long = "R".repeat(RoomId::MAX_LEN + 1);
        assert!(RoomId::try_from(long.as_str()).is_err());
    }

    #[test]
    fn test_room_id_error_converts() {
        let err: crate::Error = RoomId::try_from("").unwrap_err().into();
        assert!(matches!(err, crate::Error::InvalidRoomId { .. }));
    }

    #[test]
    fn test_record_deserializes_directory_format() {
        let json = r#"{
            "roomId": "R007",
            "roomType": "VIP",
            "pricePerDay": 1250.5,
            "isAvailable": false,
            "services": [{"serviceName": "Spa", "price": 20.0, "quantity": 1}]
        }"#;
        let room: RoomRecord = serde_json::from_str(json).unwrap();
        assert_eq!(room.id.as_str(), "R007");
        assert_eq!(room.room_type, "VIP");
        assert!((room.price_per_day - 1250.5).abs() < f64::EPSILON);
        assert!(!room.is_available());
    }

    #[test]
    fn test_record_defaults_to_available() {
        let json = r#"{"roomId": "R1", "roomType": "Standard", "pricePerDay": 100}"#;
        let room: RoomRecord = serde_json::from_str(json).unwrap();
        assert!(room.is_available());
    }

    #[test]
    fn test_record_rejects_blank_id() {
        let json = r#"{"roomId": " ", "roomType": "Standard", "pricePerDay": 100}"#;
        assert!(serde_json::from_str::<RoomRecord>(json).is_err());
    }

    #[test]
    fn test_is_type_is_exact() {
        let room = RoomRecord::new("R1", "Deluxe", 400.0).unwrap();
        assert!(room.is_type("Deluxe"));
        assert!(!room.is_type("deluxe"));
        assert!(!room.with_available(false).is_available());
    }
}
