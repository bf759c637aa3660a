//! Room bundle search.
//!
//! The [`CombinationSolver`] assembles one bundle of rooms that satisfies a
//! [`Demand`]. Demand entries are filled in order. For each entry the
//! snapshot is scanned front to back and the first unused, available rooms
//! of the requested type are committed until the entry's quantity is met,
//! then the next entry is filled.
//!
//! Backtracking happens at the level of whole demand entries, never at the
//! level of individual room choices: when a later entry cannot be filled,
//! the rooms committed for every earlier entry are released and the search
//! reports failure. It does not retry an earlier entry with a different set
//! of rooms. Because rooms match on their exact type tag, rooms of one type
//! are interchangeable for feasibility, so this only fixes *which* rooms are
//! returned (always the earliest in snapshot order), not *whether* a bundle
//! is found.
//!
//! The search is driven by an explicit stack of frames (one per demand
//! entry) rather than by recursion, so its depth is bounded by the heap,
//! and it checks an optional [`SearchBudget`] once per room examined.

use std::collections::HashSet;

use crate::error::Result;
use crate::room::RoomRecord;

use super::budget::SearchBudget;
use super::demand::Demand;

/// The rooms selected for one demand entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionGroup<'a> {
    /// The type tag requested by the entry.
    pub room_type: String,
    /// The committed rooms, in snapshot order.
    pub rooms: Vec<&'a RoomRecord>,
}

/// A duplicate-free assignment of rooms to a demand.
///
/// Holds one group per demand entry, in demand order. Rooms are borrowed
/// from the snapshot the search ran against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution<'a> {
    groups: Vec<SolutionGroup<'a>>,
}

impl<'a> Solution<'a> {
    /// The per-entry groups.
    #[must_use]
    pub fn groups(&self) -> &[SolutionGroup<'a>] {
        &self.groups
    }

    /// All selected rooms, group by group.
    pub fn rooms(&self) -> impl Iterator<Item = &'a RoomRecord> + '_ {
        self.groups.iter().flat_map(|g| g.rooms.iter().copied())
    }

    /// Number of selected rooms (the demand's total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.rooms.len()).sum()
    }

    /// Returns `true` if no room was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers of the selected rooms.
    #[must_use]
    pub fn room_ids(&self) -> Vec<&'a str> {
        self.rooms().map(|r| r.id.as_str()).collect()
    }

    /// Sum of the selected rooms' nightly prices.
    #[must_use]
    pub fn total_price_per_day(&self) -> f64 {
        self.rooms().map(|r| r.price_per_day).sum()
    }

    /// Flattens the solution into its room references.
    #[must_use]
    pub fn into_rooms(self) -> Vec<&'a RoomRecord> {
        self.groups.into_iter().flat_map(|g| g.rooms).collect()
    }
}

/// Outcome of a combination search.
#[derive(Debug, Clone, PartialEq)]
pub enum CombinationResult<'a> {
    /// A bundle satisfying every entry was found.
    Found(Solution<'a>),
    /// No bundle was found. Names the entry whose scan ran out of rooms.
    Infeasible {
        /// Position of the entry in the demand.
        demand_index: usize,
        /// The entry's type tag.
        room_type: String,
        /// The entry's quantity.
        requested: u32,
        /// How many rooms the scan matched before running out.
        matched: u32,
    },
}

impl<'a> CombinationResult<'a> {
    /// Returns `true` for [`CombinationResult::Found`].
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<'a>> {
        match self {
            Self::Found(solution) => Some(solution),
            Self::Infeasible { .. } => None,
        }
    }

    /// Consumes the result, returning the solution if one was found.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution<'a>> {
        match self {
            Self::Found(solution) => Some(solution),
            Self::Infeasible { .. } => None,
        }
    }
}

/// Search state for one demand entry.
#[derive(Debug)]
struct Frame {
    level: usize,
    scan: usize,
    committed: u32,
}

impl Frame {
    const fn new(level: usize) -> Self {
        Self {
            level,
            scan: 0,
            committed: 0,
        }
    }
}

/// Finds one room bundle satisfying a demand.
///
/// The solver borrows the snapshot for its lifetime; the caller must not
/// mutate the rooms while a search runs. It keeps only the first solution
/// found, and [`CombinationSolver::solution`] is empty after a failed
/// search.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::{CombinationSolver, Demand};
/// use roomfit::RoomRecord;
///
/// let rooms = vec![
///     RoomRecord::new("R1", "Standard", 100.0).unwrap(),
///     RoomRecord::new("R2", "Deluxe", 400.0).unwrap(),
///     RoomRecord::new("R3", "Standard", 120.0).unwrap(),
/// ];
///
/// let mut solver = CombinationSolver::new(&rooms);
/// let demand = Demand::new().with("Standard", 2).with("Deluxe", 1);
///
/// assert!(solver.find(&demand).unwrap());
/// let ids: Vec<_> = solver.solution().iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, vec!["R1", "R3", "R2"]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationSolver<'a> {
    rooms: &'a [RoomRecord],
    budget: SearchBudget,
    solution: Option<Solution<'a>>,
}

impl<'a> CombinationSolver<'a> {
    /// Creates a solver over a room snapshot, with no budget.
    #[must_use]
    pub fn new(rooms: &'a [RoomRecord]) -> Self {
        Self {
            rooms,
            budget: SearchBudget::unlimited(),
            solution: None,
        }
    }

    /// Applies a search budget to subsequent searches.
    #[must_use]
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Runs a search and reports whether a bundle was found.
    ///
    /// Any previously retained solution is discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchInterrupted`](crate::Error::SearchInterrupted)
    /// if the budget is exhausted. No partial solution is retained.
    pub fn find(&mut self, demand: &Demand) -> Result<bool> {
        self.solution = None;
        let result = self.solve(demand)?;
        self.solution = result.into_solution();
        Ok(self.solution.is_some())
    }

    /// The rooms of the last solution found, or an empty list.
    #[must_use]
    pub fn solution(&self) -> Vec<&'a RoomRecord> {
        self.solution
            .as_ref()
            .map(|s| s.rooms().collect())
            .unwrap_or_default()
    }

    /// Takes the retained solution, leaving the solver empty.
    pub fn take_solution(&mut self) -> Option<Solution<'a>> {
        self.solution.take()
    }

    /// Runs a search without touching the retained solution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchInterrupted`](crate::Error::SearchInterrupted)
    /// if the budget is exhausted.
    pub fn solve(&self, demand: &Demand) -> Result<CombinationResult<'a>> {
        let rooms: &'a [RoomRecord] = self.rooms;
        let entries = demand.entries();
        let mut tracker = self.budget.start();

        // Indices into `self.rooms`, in commit order.
        let mut committed: Vec<usize> = Vec::with_capacity(demand.total_quantity());
        let mut used: HashSet<&'a str> = HashSet::with_capacity(committed.capacity());
        let mut stack: Vec<Frame> = Vec::with_capacity(entries.len());

        if entries.is_empty() {
            return Ok(CombinationResult::Found(Solution::default()));
        }
        stack.push(Frame::new(0));

        while let Some(frame) = stack.last_mut() {
            let entry = &entries[frame.level];
            let mut filled = false;

            while frame.scan < rooms.len() {
                tracker.tick()?;
                let index = frame.scan;
                frame.scan += 1;

                let room = &rooms[index];
                if !room.is_available() || !room.is_type(&entry.room_type) {
                    continue;
                }
                if !used.insert(room.id.as_str()) {
                    continue;
                }

                committed.push(index);
                frame.committed += 1;
                if frame.committed == entry.quantity {
                    filled = true;
                    break;
                }
            }

            if filled {
                log::debug!(
                    "filled {} with {} room(s) after {} step(s)",
                    entry,
                    frame.committed,
                    tracker.steps()
                );
                let next = frame.level + 1;
                if next == entries.len() {
                    let solution = self.build_solution(demand, &committed, &stack);
                    log::debug!(
                        "found bundle of {} room(s) in {} step(s)",
                        solution.len(),
                        tracker.steps()
                    );
                    return Ok(CombinationResult::Found(solution));
                }
                stack.push(Frame::new(next));
                continue;
            }

            // The scan for this entry ran dry. Release its rooms, then fail
            // upward: every enclosing entry gives its rooms back too.
            let failed = Frame {
                level: frame.level,
                scan: frame.scan,
                committed: frame.committed,
            };
            log::debug!(
                "could not fill {} (matched {}), giving up after {} step(s)",
                entry,
                failed.committed,
                tracker.steps()
            );
            while let Some(frame) = stack.pop() {
                for _ in 0..frame.committed {
                    if let Some(index) = committed.pop() {
                        used.remove(rooms[index].id.as_str());
                    }
                }
            }
            debug_assert!(committed.is_empty());

            return Ok(CombinationResult::Infeasible {
                demand_index: failed.level,
                room_type: entry.room_type.clone(),
                requested: entry.quantity,
                matched: failed.committed,
            });
        }

        unreachable!("the search loop returns before the stack empties")
    }

    fn build_solution(&self, demand: &Demand, committed: &[usize], stack: &[Frame]) -> Solution<'a> {
        let rooms: &'a [RoomRecord] = self.rooms;
        let mut groups = Vec::with_capacity(stack.len());
        let mut offset = 0;
        for frame in stack {
            let end = offset + frame.committed as usize;
            groups.push(SolutionGroup {
                room_type: demand.entries()[frame.level].room_type.clone(),
                rooms: committed[offset..end].iter().map(|&i| &rooms[i]).collect(),
            });
            offset = end;
        }
        Solution { groups }
    }
}

/// Searches `rooms` for a bundle satisfying `demand`, without a budget.
///
/// # Errors
///
/// Never fails with an unlimited budget; the `Result` mirrors
/// [`CombinationSolver::solve`].
///
/// # Examples
///
/// ```
/// use roomfit::allocation::{solve_combination, Demand};
/// use roomfit::RoomRecord;
///
/// let rooms = vec![RoomRecord::new("R1", "Suite", 900.0).unwrap()];
/// let demand = Demand::new().with("Suite", 2);
///
/// assert!(!solve_combination(&demand, &rooms).unwrap().is_found());
/// ```
pub fn solve_combination<'a>(
    demand: &Demand,
    rooms: &'a [RoomRecord],
) -> Result<CombinationResult<'a>> {
    CombinationSolver::new(rooms).solve(demand)
}
