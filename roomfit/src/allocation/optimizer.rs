//! Minimum-cost stay allocation.
//!
//! Given several priced room options, each usable for at most a number of
//! days, the [`CostOptimizer`] decides how many days to spend in each so a
//! stay of a fixed length is covered at minimum total price.
//!
//! This is a bounded knapsack solved by dynamic programming. Row `i` of the
//! table holds, for every day count `j`, the cheapest way to cover exactly
//! `j` days with the first `i` options. Only the previous row of costs is
//! kept; the chosen day counts for every row are retained so the
//! assignment can be rebuilt by walking the rows backwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::room::{RoomId, RoomRecord};

/// A priced room choice with a cap on how many days it may be used.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::StayOption;
///
/// let option: StayOption = "R101=120.5:3".parse().unwrap();
/// assert_eq!(option.room_id.as_str(), "R101");
/// assert_eq!(option.max_days, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayOption {
    /// The room this option refers to.
    pub room_id: RoomId,
    /// The room's type tag, informational only.
    #[serde(default)]
    pub room_type: String,
    /// Price per day.
    pub price_per_day: f64,
    /// Maximum number of days this option may be assigned.
    pub max_days: u32,
}

impl StayOption {
    /// Creates an option.
    ///
    /// # Errors
    ///
    /// Returns an error if `room_id` is not a valid identifier.
    pub fn new(
        room_id: impl Into<String>,
        room_type: impl Into<String>,
        price_per_day: f64,
        max_days: u32,
    ) -> Result<Self> {
        Ok(Self {
            room_id: RoomId::try_from(room_id.into())?,
            room_type: room_type.into(),
            price_per_day,
            max_days,
        })
    }

    /// Builds an option from a room record and a day cap.
    #[must_use]
    pub fn from_room(room: &RoomRecord, max_days: u32) -> Self {
        Self {
            room_id: room.id.clone(),
            room_type: room.room_type.clone(),
            price_per_day: room.price_per_day,
            max_days,
        }
    }

    /// Checks that the price is a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns a validation error otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.price_per_day.is_finite() || self.price_per_day < 0.0 {
            return Err(Error::validation(
                format!("options[{}].price", self.room_id),
                format!(
                    "price must be a non-negative number, got {}",
                    self.price_per_day
                ),
            ));
        }
        Ok(())
    }
}

impl FromStr for StayOption {
    type Err = Error;

    /// Parses `ID=PRICE:MAXDAYS`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::validation("option", format!("expected ID=PRICE:MAXDAYS, got '{s}'"));

        let (id, rest) = s.split_once('=').ok_or_else(invalid)?;
        let (price, max_days) = rest.split_once(':').ok_or_else(invalid)?;

        let price_per_day = price.trim().parse::<f64>().map_err(|_| {
            Error::validation("option", format!("price must be a number in '{s}'"))
        })?;
        let max_days = max_days.trim().parse::<u32>().map_err(|_| {
            Error::validation(
                "option",
                format!("max days must be a non-negative integer in '{s}'"),
            )
        })?;

        let option = Self::new(id.trim(), String::new(), price_per_day, max_days)?;
        option.validate()?;
        Ok(option)
    }
}

/// Days assigned to one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAssignment {
    /// The option's room.
    pub room_id: RoomId,
    /// Days assigned, never above the option's cap.
    pub days: u32,
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} day(s))", self.room_id, self.days)
    }
}

/// A minimum-cost assignment of days to options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// Total price of the assignment.
    pub total_cost: f64,
    /// Per-option day counts, in option order. Options assigned zero days
    /// are omitted.
    pub assignments: Vec<DayAssignment>,
}

impl Allocation {
    /// Sum of assigned days.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.assignments.iter().map(|a| a.days).sum()
    }

    /// Days assigned to a room, zero if it was not used.
    #[must_use]
    pub fn days_for(&self, room_id: &str) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.room_id.as_str() == room_id)
            .map(|a| a.days)
            .sum()
    }
}

/// Outcome of a cost optimization.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeOutcome {
    /// The stay can be covered; holds the cheapest assignment.
    Allocated(Allocation),
    /// The options' caps cannot add up to the requested stay.
    Infeasible {
        /// The requested stay length.
        requested_days: u32,
        /// Sum of all options' caps.
        capacity: u64,
    },
}

impl OptimizeOutcome {
    /// Returns `true` for [`OptimizeOutcome::Allocated`].
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Allocated(_))
    }

    /// The allocation, if feasible.
    #[must_use]
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            Self::Infeasible { .. } => None,
        }
    }

    /// Consumes the outcome, returning the allocation if feasible.
    #[must_use]
    pub fn into_allocation(self) -> Option<Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            Self::Infeasible { .. } => None,
        }
    }
}

/// Cheapest-cover optimizer over a fixed set of options.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::{CostOptimizer, StayOption};
///
/// let options = vec![
///     StayOption::new("A", "Standard", 50.0, 10).unwrap(),
///     StayOption::new("B", "Deluxe", 80.0, 10).unwrap(),
/// ];
///
/// let allocation = CostOptimizer::new(&options)
///     .optimize(10)
///     .into_allocation()
///     .unwrap();
///
/// assert_eq!(allocation.total_cost, 500.0);
/// assert_eq!(allocation.days_for("A"), 10);
/// assert_eq!(allocation.days_for("B"), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostOptimizer<'a> {
    options: &'a [StayOption],
}

impl<'a> CostOptimizer<'a> {
    /// Creates an optimizer over `options`. Options are assumed validated.
    #[must_use]
    pub fn new(options: &'a [StayOption]) -> Self {
        Self { options }
    }

    /// Sum of all options' caps.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.options.iter().map(|o| u64::from(o.max_days)).sum()
    }

    /// Finds the cheapest way to cover exactly `total_days` days.
    ///
    /// A stay of zero days, or an empty option list, costs nothing and
    /// yields an empty assignment. Otherwise, if the caps cannot reach
    /// `total_days`, the outcome is [`OptimizeOutcome::Infeasible`].
    ///
    /// When several assignments share the minimum cost, the one found first
    /// in option order wins; using fewer days of a later option is
    /// preferred over an equally priced alternative.
    #[must_use]
    pub fn optimize(&self, total_days: u32) -> OptimizeOutcome {
        if self.options.is_empty() || total_days == 0 {
            return OptimizeOutcome::Allocated(Allocation::default());
        }

        let capacity = self.capacity();
        if capacity < u64::from(total_days) {
            log::debug!("stay of {total_days} day(s) exceeds option capacity {capacity}");
            return OptimizeOutcome::Infeasible {
                requested_days: total_days,
                capacity,
            };
        }

        let days = total_days as usize;

        // `None` marks a day count no combination of the options seen so far
        // can cover exactly.
        let mut previous: Vec<Option<f64>> = vec![None; days + 1];
        previous[0] = Some(0.0);
        let mut choices: Vec<Vec<u32>> = Vec::with_capacity(self.options.len());

        for option in self.options {
            let mut current = previous.clone();
            let mut chosen = vec![0_u32; days + 1];
            let cap = option.max_days as usize;

            for j in 1..=days {
                for k in 1..=cap.min(j) {
                    let Some(base) = previous[j - k] else {
                        continue;
                    };
                    #[allow(clippy::cast_precision_loss)]
                    let cost = base + option.price_per_day * k as f64;
                    if current[j].map_or(true, |best| cost < best) {
                        current[j] = Some(cost);
                        chosen[j] = u32::try_from(k).unwrap_or(option.max_days);
                    }
                }
            }

            choices.push(chosen);
            previous = current;
        }

        let Some(total_cost) = previous[days] else {
            return OptimizeOutcome::Infeasible {
                requested_days: total_days,
                capacity,
            };
        };

        let mut assignments = Vec::new();
        let mut remaining = days;
        for (option, chosen) in self.options.iter().zip(&choices).rev() {
            if remaining == 0 {
                break;
            }
            let k = chosen[remaining];
            if k > 0 {
                assignments.push(DayAssignment {
                    room_id: option.room_id.clone(),
                    days: k,
                });
                remaining -= k as usize;
            }
        }
        assignments.reverse();

        log::debug!(
            "covered {total_days} day(s) with {} option(s) for {total_cost}",
            assignments.len()
        );

        OptimizeOutcome::Allocated(Allocation {
            total_cost,
            assignments,
        })
    }
}

/// Finds the cheapest cover of `total_days` days using `options`.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::{optimize_cost, StayOption};
///
/// let options = vec![StayOption::new("A", "Standard", 100.0, 5).unwrap()];
///
/// let allocation = optimize_cost(&options, 5).into_allocation().unwrap();
/// assert_eq!(allocation.total_cost, 500.0);
///
/// assert!(!optimize_cost(&options, 6).is_feasible());
/// ```
#[must_use]
pub fn optimize_cost(options: &[StayOption], total_days: u32) -> OptimizeOutcome {
    CostOptimizer::new(options).optimize(total_days)
}
