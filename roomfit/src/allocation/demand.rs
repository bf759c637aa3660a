//! Room bundle demands.
//!
//! A [`Demand`] is an ordered list of `(room type, quantity)` entries. The
//! order defines the order in which the combination solver fills the
//! entries; it is not a priority.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One `(room type, quantity)` entry of a demand.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::DemandEntry;
///
/// let entry: DemandEntry = "Deluxe=2".parse().unwrap();
/// assert_eq!(entry.room_type, "Deluxe");
/// assert_eq!(entry.quantity, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DemandEntry {
    /// The requested type tag.
    pub room_type: String,
    /// How many rooms of that type are requested.
    pub quantity: u32,
}

impl DemandEntry {
    /// Creates a new entry without validating it.
    #[must_use]
    pub fn new(room_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            room_type: room_type.into(),
            quantity,
        }
    }
}

impl fmt::Display for DemandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.room_type, self.quantity)
    }
}

impl FromStr for DemandEntry {
    type Err = Error;

    /// Parses `TYPE=COUNT` (also accepts `TYPE:COUNT`).
    fn from_str(s: &str) -> Result<Self> {
        let (room_type, count) = s
            .split_once('=')
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| {
                Error::validation("request", format!("expected TYPE=COUNT, got '{s}'"))
            })?;

        let room_type = room_type.trim();
        if room_type.is_empty() {
            return Err(Error::validation(
                "request",
                format!("room type is missing in '{s}'"),
            ));
        }

        let quantity = count.trim().parse::<u32>().map_err(|_| {
            Error::validation(
                "request",
                format!("count must be a non-negative integer in '{s}'"),
            )
        })?;

        Ok(Self::new(room_type, quantity))
    }
}

/// An ordered list of demand entries.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::Demand;
///
/// let demand = Demand::new()
///     .with("Standard", 2)
///     .with("Deluxe", 1);
///
/// assert_eq!(demand.len(), 2);
/// assert_eq!(demand.total_quantity(), 3);
/// demand.validate().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demand {
    entries: Vec<DemandEntry>,
}

impl Demand {
    /// Creates an empty demand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the demand.
    #[must_use]
    pub fn with(mut self, room_type: impl Into<String>, quantity: u32) -> Self {
        self.push(DemandEntry::new(room_type, quantity));
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: DemandEntry) {
        self.entries.push(entry);
    }

    /// The entries in fill order.
    #[must_use]
    pub fn entries(&self) -> &[DemandEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all requested quantities, i.e. the size of any solution.
    #[must_use]
    pub fn total_quantity(&self) -> usize {
        self.entries.iter().map(|e| e.quantity as usize).sum()
    }

    /// Checks the demand the way a caller should before invoking the solver.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the demand is empty, or an entry has a
    /// blank type or a zero quantity.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::validation(
                "requests",
                "at least one room request is required",
            ));
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.room_type.trim().is_empty() {
                return Err(Error::validation(
                    format!("requests[{index}].type"),
                    "room type cannot be empty",
                ));
            }
            if entry.quantity == 0 {
                return Err(Error::validation(
                    format!("requests[{index}].count"),
                    "count must be greater than 0",
                ));
            }
        }

        Ok(())
    }
}

impl FromIterator<DemandEntry> for Demand {
    fn from_iter<I: IntoIterator<Item = DemandEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Demand {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(room_type, quantity)| DemandEntry::new(room_type, quantity))
            .collect()
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(", "))
    }
}
