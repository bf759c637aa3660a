//! Room allocation core.
//!
//! Two independent, pure components working on a caller-supplied snapshot:
//!
//! - [`CombinationSolver`]: finds one bundle of rooms satisfying an ordered
//!   list of `(room type, quantity)` demands.
//! - [`CostOptimizer`]: splits a stay of fixed length across several priced,
//!   day-capped options at minimum total cost.
//!
//! Neither component performs I/O or keeps state between calls. Infeasible
//! requests are reported through [`CombinationResult`] and
//! [`OptimizeOutcome`], not through errors.
//!
//! # Examples
//!
//! ```
//! use roomfit::allocation::{optimize_cost, solve_combination, Demand, StayOption};
//! use roomfit::RoomRecord;
//!
//! let rooms = vec![
//!     RoomRecord::new("R1", "Standard", 120.0).unwrap(),
//!     RoomRecord::new("R2", "Deluxe", 480.0).unwrap(),
//! ];
//!
//! let demand = Demand::new().with("Standard", 1).with("Deluxe", 1);
//! let bundle = solve_combination(&demand, &rooms).unwrap();
//! assert!(bundle.is_found());
//!
//! let options: Vec<_> = rooms.iter().map(|r| StayOption::from_room(r, 3)).collect();
//! let stay = optimize_cost(&options, 4);
//! assert_eq!(stay.allocation().unwrap().total_days(), 4);
//! ```

pub mod budget;
pub mod combination;
pub mod demand;
pub mod optimizer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use budget::{BudgetTracker, SearchBudget};
pub use combination::{
    solve_combination, CombinationResult, CombinationSolver, Solution, SolutionGroup,
};
pub use demand::{Demand, DemandEntry};
pub use optimizer::{
    optimize_cost, Allocation, CostOptimizer, DayAssignment, OptimizeOutcome, StayOption,
};
