//! Combine command implementation.
//!
//! This module implements the `combine` command, which searches the room
//! snapshot for one bundle satisfying every `--request TYPE=COUNT`.

use crate::error::CliError;
use crate::utils::{load_configuration, load_snapshot, resolve_format, GlobalOptions};
use clap::Args;
use roomfit::output::CombinationReport;
use roomfit::{CombinationResult, CombinationSolver, Demand, DemandEntry, OutputFormat};
use std::time::{Duration, Instant};

/// Find one bundle of rooms satisfying a list of requests.
#[derive(Args)]
pub struct CombineCommand {
    /// Requested rooms, in search order (repeatable)
    #[arg(long = "request", short = 'r', value_name = "TYPE=COUNT", required = true)]
    pub requests: Vec<String>,

    /// Stop after examining this many rooms
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,

    /// Output format (json, human, csv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl CombineCommand {
    /// Execute the combine command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate the demand
        let demand = self.demand()?;

        // 2. Load configuration and the snapshot
        let config = load_configuration(global)?;
        let snapshot = load_snapshot(global, &config)?;

        // 3. Command-line limits override configured ones
        let mut budget = config.search_budget();
        if let Some(steps) = self.max_steps {
            budget = budget.with_max_steps(steps);
        }
        if let Some(ms) = self.time_limit_ms {
            budget = budget.with_time_limit(Duration::from_millis(ms));
        }

        // 4. Search
        let started = Instant::now();
        let result = CombinationSolver::new(snapshot.rooms())
            .with_budget(budget)
            .solve(&demand)?;
        let elapsed = started.elapsed();

        match result {
            CombinationResult::Found(solution) => {
                let report = CombinationReport::new(&solution, elapsed);
                let formatter = resolve_format(self.format, &config).create_formatter();
                println!("{}", formatter.format_combination(&report)?);
                Ok(())
            }
            CombinationResult::Infeasible {
                room_type,
                requested,
                matched,
                ..
            } => {
                log::info!("only {matched} of {requested} '{room_type}' room(s) could be matched");
                Err(CliError::SemanticFailure(
                    "no room combination satisfies the request".to_string(),
                ))
            }
        }
    }

    fn demand(&self) -> Result<Demand, CliError> {
        let demand = self
            .requests
            .iter()
            .map(|r| r.parse::<DemandEntry>())
            .collect::<Result<Demand, _>>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        demand
            .validate()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        Ok(demand)
    }
}
