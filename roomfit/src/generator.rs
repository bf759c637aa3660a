//! Seeded synthetic room snapshots.
//!
//! Used for demos and benchmarks. All randomness comes from a generator
//! seeded by the caller, so the same seed always yields the same snapshot.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::room::{RoomId, RoomRecord};
use crate::snapshot::RoomSnapshot;

/// A room category with its nightly price band.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCategory {
    /// Type tag.
    pub name: String,
    /// Lowest nightly price.
    pub min_price: f64,
    /// Highest nightly price.
    pub max_price: f64,
}

impl RoomCategory {
    /// Creates a category.
    #[must_use]
    pub fn new(name: &str, min_price: f64, max_price: f64) -> Self {
        Self {
            name: name.to_string(),
            min_price,
            max_price,
        }
    }
}

/// The default categories: Standard, Deluxe and VIP.
#[must_use]
pub fn default_categories() -> Vec<RoomCategory> {
    vec![
        RoomCategory::new("Standard", 100.0, 300.0),
        RoomCategory::new("Deluxe", 400.0, 800.0),
        RoomCategory::new("VIP", 1000.0, 2500.0),
    ]
}

/// Builds synthetic snapshots from an explicit seed.
///
/// # Examples
///
/// ```
/// use roomfit::SnapshotGenerator;
///
/// let a = SnapshotGenerator::new(7).generate(30).unwrap();
/// let b = SnapshotGenerator::new(7).generate(30).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.rooms()[0].id.as_str().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotGenerator {
    seed: u64,
    categories: Vec<RoomCategory>,
    available_ratio: f64,
}

impl SnapshotGenerator {
    /// Creates a generator with the default categories and every room
    /// available.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            categories: default_categories(),
            available_ratio: 1.0,
        }
    }

    /// Replaces the room categories.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<RoomCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the probability that a generated room is available.
    #[must_use]
    pub fn with_availability(mut self, ratio: f64) -> Self {
        self.available_ratio = ratio;
        self
    }

    /// Generates `count` rooms.
    ///
    /// Categories are spread as evenly as possible and then shuffled.
    /// Identifiers are `R001`, `R002`, ... in generation order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if there are no categories, a price band
    /// is inverted or negative, or the availability ratio is outside `0..=1`.
    pub fn generate(&self, count: usize) -> Result<RoomSnapshot> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let kinds = self.categories.len();

        let mut layout: Vec<usize> = (0..kinds)
            .flat_map(|k| std::iter::repeat(k).take(count / kinds))
            .chain(0..count % kinds)
            .collect();
        layout.shuffle(&mut rng);

        let mut rooms = Vec::with_capacity(count);
        for (i, kind) in layout.into_iter().enumerate() {
            let category = &self.categories[kind];
            let step = f64::from(rng.gen_range(0_u32..100)) / 100.0;
            let price = category.min_price + step * (category.max_price - category.min_price);
            let available = rng.gen_bool(self.available_ratio);

            rooms.push(RoomRecord {
                id: RoomId::try_from(format!("R{:03}", i + 1))?,
                room_type: category.name.clone(),
                price_per_day: price,
                available,
            });
        }

        RoomSnapshot::from_records(rooms)
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::validation(
                "categories",
                "at least one room category is required",
            ));
        }
        for category in &self.categories {
            if category.min_price < 0.0 || category.max_price < category.min_price {
                return Err(Error::validation(
                    format!("categories.{}", category.name),
                    "price band must satisfy 0 <= min <= max",
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.available_ratio) {
            return Err(Error::validation(
                "available_ratio",
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_snapshot() {
        let a = SnapshotGenerator::new(42).generate(100).unwrap();
        let b = SnapshotGenerator::new(42).generate(100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = SnapshotGenerator::new(1).generate(100).unwrap();
        let b = SnapshotGenerator::new(2).generate(100).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_categories_are_balanced() {
        let snapshot = SnapshotGenerator::new(3).generate(10).unwrap();
        assert_eq!(snapshot.available_count("Standard"), 4);
        assert_eq!(snapshot.available_count("Deluxe"), 3);
        assert_eq!(snapshot.available_count("VIP"), 3);
    }

    #[test]
    fn test_ids_and_prices() {
        let snapshot = SnapshotGenerator::new(9).generate(120).unwrap();
        assert_eq!(snapshot.rooms()[0].id.as_str(), "R001");
        assert_eq!(snapshot.rooms()[119].id.as_str(), "R120");

        for room in snapshot.rooms() {
            let band = default_categories()
                .into_iter()
                .find(|c| c.name == room.room_type)
                .unwrap();
            assert!(room.price_per_day >= band.min_price);
            assert!(room.price_per_day <= band.max_price);
        }
    }

    #[test]
    fn test_zero_ratio_marks_all_unavailable() {
        let snapshot = SnapshotGenerator::new(5)
            .with_availability(0.0)
            .generate(20)
            .unwrap();
        assert!(snapshot.rooms().iter().all(|r| !r.is_available()));
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let result = SnapshotGenerator::new(5).with_availability(1.5).generate(1);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_categories() {
        let result = SnapshotGenerator::new(5).with_categories(Vec::new()).generate(1);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_categories() {
        let snapshot = SnapshotGenerator::new(5)
            .with_categories(vec![RoomCategory::new("Suite", 900.0, 900.0)])
            .generate(3)
            .unwrap();
        assert!(snapshot.rooms().iter().all(|r| r.is_type("Suite")));
        assert!(snapshot
            .rooms()
            .iter()
            .all(|r| (r.price_per_day - 900.0).abs() < f64::EPSILON));
    }
}
