//! Optimize command implementation.
//!
//! Options come either from repeated `--option ID=PRICE:MAXDAYS` flags or
//! from every available snapshot room of one `--type`, each capped at
//! `--max-days`.

use crate::error::CliError;
use crate::utils::{load_configuration, load_snapshot, resolve_format, GlobalOptions};
use clap::Args;
use roomfit::output::CostReport;
use roomfit::{Config, CostOptimizer, OptimizeOutcome, OutputFormat, StayOption};
use std::time::Instant;

/// Split a stay across priced rooms at minimum cost.
#[derive(Args)]
pub struct OptimizeCommand {
    /// Length of the stay in days
    #[arg(long, value_name = "DAYS")]
    pub days: u32,

    /// A priced, capped option (repeatable)
    #[arg(
        long = "option",
        value_name = "ID=PRICE:MAXDAYS",
        conflicts_with = "room_type",
        required_unless_present = "room_type"
    )]
    pub options: Vec<String>,

    /// Use every available room of this type from the snapshot
    #[arg(long = "type", value_name = "TYPE", requires = "max_days")]
    pub room_type: Option<String>,

    /// Day cap for each room selected with --type
    #[arg(long, value_name = "DAYS", requires = "room_type")]
    pub max_days: Option<u32>,

    /// Output format (json, human, csv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl OptimizeCommand {
    /// Execute the optimize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.days == 0 {
            return Err(CliError::InvalidArguments(
                "--days must be greater than 0".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let options = self.options(global, &config)?;
        log::debug!("optimizing {} day(s) over {} option(s)", self.days, options.len());

        let started = Instant::now();
        let outcome = CostOptimizer::new(&options).optimize(self.days);
        let elapsed = started.elapsed();

        match outcome {
            OptimizeOutcome::Allocated(allocation) => {
                let report = CostReport::new(&allocation, elapsed);
                let formatter = resolve_format(self.format, &config).create_formatter();
                println!("{}", formatter.format_cost(&report)?);
                Ok(())
            }
            OptimizeOutcome::Infeasible {
                requested_days,
                capacity,
            } => Err(CliError::SemanticFailure(format!(
                "stay of {requested_days} day(s) exceeds the combined capacity of {capacity} day(s)"
            ))),
        }
    }

    fn options(&self, global: &GlobalOptions, config: &Config) -> Result<Vec<StayOption>, CliError> {
        if let (Some(room_type), Some(max_days)) = (&self.room_type, self.max_days) {
            let snapshot = load_snapshot(global, config)?;
            let options: Vec<_> = snapshot
                .rooms()
                .iter()
                .filter(|room| room.is_available() && room.is_type(room_type))
                .map(|room| StayOption::from_room(room, max_days))
                .collect();

            if options.is_empty() {
                return Err(CliError::SemanticFailure(format!(
                    "no available rooms of type '{room_type}'"
                )));
            }
            return Ok(options);
        }

        if self.options.is_empty() {
            return Err(CliError::InvalidArguments(
                "provide --option or --type with --max-days".to_string(),
            ));
        }

        self.options
            .iter()
            .map(|s| s.parse::<StayOption>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))
    }
}
