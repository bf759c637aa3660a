//! Cooperative search budgets.
//!
//! The combination search has no natural time bound. A [`SearchBudget`]
//! lets the caller cap it by a number of steps, a wall-clock limit, or
//! both. The solver calls [`BudgetTracker::tick`] once per room examined.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Limits applied to a single combination search.
///
/// # Examples
///
/// ```
/// use roomfit::allocation::SearchBudget;
/// use std::time::Duration;
///
/// let budget = SearchBudget::unlimited()
///     .with_max_steps(100_000)
///     .with_time_limit(Duration::from_millis(250));
///
/// assert_eq!(budget.max_steps(), Some(100_000));
/// assert!(!budget.is_unlimited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    max_steps: Option<u64>,
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl SearchBudget {
    /// Steps between two clock reads when a time limit is set.
    pub const DEFAULT_CHECK_INTERVAL: u64 = 1_024;

    /// A budget that never trips.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_steps: None,
            time_limit: None,
            check_interval: Self::DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Caps the number of rooms examined.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Caps the wall-clock time of the search.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets how many steps pass between clock reads. Zero is treated as one.
    #[must_use]
    pub const fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = if interval == 0 { 1 } else { interval };
        self
    }

    /// The step cap, if any.
    #[must_use]
    pub const fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    /// The time limit, if any.
    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Returns `true` if neither limit is set.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.time_limit.is_none()
    }

    /// Starts tracking a new search against this budget.
    #[must_use]
    pub fn start(&self) -> BudgetTracker {
        BudgetTracker {
            budget: *self,
            started: Instant::now(),
            steps: 0,
            since_check: 0,
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Per-search counter created by [`SearchBudget::start`].
#[derive(Debug)]
pub struct BudgetTracker {
    budget: SearchBudget,
    started: Instant,
    steps: u64,
    since_check: u64,
}

impl BudgetTracker {
    /// Records one step and checks the limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchInterrupted`] once a limit is exceeded.
    pub fn tick(&mut self) -> Result<()> {
        self.steps += 1;

        if let Some(max) = self.budget.max_steps {
            if self.steps > max {
                return Err(Error::SearchInterrupted {
                    steps: self.steps - 1,
                    reason: format!("step limit of {max} reached"),
                });
            }
        }

        if let Some(limit) = self.budget.time_limit {
            self.since_check += 1;
            if self.since_check >= self.budget.check_interval {
                self.since_check = 0;
                if self.started.elapsed() >= limit {
                    return Err(Error::SearchInterrupted {
                        steps: self.steps,
                        reason: format!("time limit of {}ms reached", limit.as_millis()),
                    });
                }
            }
        }

        Ok(())
    }

    /// Steps recorded so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Time since the search started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
