#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roomfit
//!
//! Room allocation for hotel bookings.
//!
//! This library answers two questions against an in-memory snapshot of
//! rooms: which concrete rooms satisfy a list of `(type, quantity)`
//! requests, and how a stay of fixed length can be split across several
//! priced, day-capped rooms at minimum total cost.
//!
//! ## Core Types
//!
//! - [`RoomRecord`] and [`RoomSnapshot`]: the rooms being allocated
//! - [`CombinationSolver`] and [`Demand`]: greedy bundle search
//! - [`CostOptimizer`] and [`StayOption`]: bounded-knapsack cost split
//! - [`SnapshotGenerator`]: seeded synthetic snapshots
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roomfit::{CombinationSolver, Demand, RoomRecord};
//!
//! let rooms = vec![
//!     RoomRecord::new("R1", "Standard", 100.0).unwrap(),
//!     RoomRecord::new("R2", "Standard", 100.0).unwrap(),
//!     RoomRecord::new("R3", "Deluxe", 200.0).unwrap(),
//! ];
//!
//! let mut solver = CombinationSolver::new(&rooms);
//! let demand = Demand::new().with("Standard", 2).with("Deluxe", 1);
//! assert!(solver.find(&demand).unwrap());
//!
//! let ids: Vec<_> = solver.solution().iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["R1", "R2", "R3"]);
//! ```

pub mod allocation;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod room;
pub mod snapshot;

// Re-export key types at crate root for convenience
pub use allocation::{
    optimize_cost, solve_combination, Allocation, CombinationResult, CombinationSolver,
    CostOptimizer, DayAssignment, Demand, DemandEntry, OptimizeOutcome, SearchBudget, Solution,
    StayOption,
};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use generator::SnapshotGenerator;
pub use logging::{init_logger, LogLevel, Logger};
pub use room::{RoomId, RoomRecord};
pub use snapshot::RoomSnapshot;
