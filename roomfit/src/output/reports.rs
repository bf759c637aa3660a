//! Serializable reports built from solver results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::allocation::{Allocation, Solution};

/// One room of a combination report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRoom {
    /// Room identifier.
    pub room_id: String,
    /// Type tag.
    pub room_type: String,
    /// Nightly price.
    pub price_per_day: f64,
}

/// Result of a successful combination search.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::{solve_combination, Demand};
/// use roomfit::output::CombinationReport;
/// use roomfit::RoomRecord;
/// use std::time::Duration;
///
/// let rooms = vec![RoomRecord::new("R1", "Standard", 120.0).unwrap()];
/// let result = solve_combination(&Demand::new().with("Standard", 1), &rooms).unwrap();
/// let report = CombinationReport::new(result.solution().unwrap(), Duration::from_millis(2));
///
/// assert_eq!(report.rooms[0].room_id, "R1");
/// assert!((report.total_amount - 120.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationReport {
    /// Chosen rooms, grouped by demand entry.
    pub rooms: Vec<ReportRoom>,
    /// Sum of the chosen rooms' nightly prices.
    pub total_amount: f64,
    /// Solver wall-clock time.
    pub execution_time_ms: f64,
}

impl CombinationReport {
    /// Builds a report from a solution and the time it took to find.
    #[must_use]
    pub fn new(solution: &Solution<'_>, elapsed: Duration) -> Self {
        Self {
            rooms: solution
                .rooms()
                .map(|room| ReportRoom {
                    room_id: room.id.to_string(),
                    room_type: room.room_type.clone(),
                    price_per_day: room.price_per_day,
                })
                .collect(),
            total_amount: solution.total_price_per_day(),
            execution_time_ms: millis(elapsed),
        }
    }
}

/// Days given to one room in a cost report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDays {
    /// Room identifier.
    pub room_id: String,
    /// Days assigned.
    pub days: u32,
}

/// Result of a feasible cost optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Minimum total price.
    pub total_cost: f64,
    /// Length of the stay.
    pub total_days: u32,
    /// Days per room, in option order.
    pub allocation: Vec<ReportDays>,
    /// Optimizer wall-clock time.
    pub execution_time_ms: f64,
}

impl CostReport {
    /// Builds a report from an allocation and the time it took to compute.
    #[must_use]
    pub fn new(allocation: &Allocation, elapsed: Duration) -> Self {
        Self {
            total_cost: allocation.total_cost,
            total_days: allocation.total_days(),
            allocation: allocation
                .assignments
                .iter()
                .map(|a| ReportDays {
                    room_id: a.room_id.to_string(),
                    days: a.days,
                })
                .collect(),
            execution_time_ms: millis(elapsed),
        }
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}
