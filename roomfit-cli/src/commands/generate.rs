//! Generate command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use roomfit::SnapshotGenerator;
use std::path::PathBuf;

/// Room count used when neither the flag nor the config sets one.
const DEFAULT_COUNT: usize = 200;

/// Seed used when neither the flag nor the config sets one.
const DEFAULT_SEED: u64 = 42;

/// Generate a synthetic room snapshot.
#[derive(Args)]
pub struct GenerateCommand {
    /// Number of rooms
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// RNG seed; the same seed always yields the same snapshot
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Probability that a room is available (0 to 1)
    #[arg(long, value_name = "RATIO")]
    pub available_ratio: Option<f64>,

    /// Write the snapshot here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let defaults = config.generator.unwrap_or_default();

        let count = self.count.or(defaults.count).unwrap_or(DEFAULT_COUNT);
        let seed = self.seed.or(defaults.seed).unwrap_or(DEFAULT_SEED);
        let ratio = self.available_ratio.or(defaults.available_ratio).unwrap_or(1.0);

        if count == 0 {
            return Err(CliError::InvalidArguments(
                "--count must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&ratio) {
            return Err(CliError::InvalidArguments(format!(
                "--available-ratio must be between 0 and 1, got {ratio}"
            )));
        }

        let snapshot = SnapshotGenerator::new(seed)
            .with_availability(ratio)
            .generate(count)?;

        match self.output {
            Some(path) => {
                snapshot.save(&path)?;
                log::info!(
                    "wrote {} room(s) to {} (seed {seed})",
                    snapshot.len(),
                    path.display()
                );
            }
            None => println!("{}", snapshot.to_json()?),
        }

        Ok(())
    }
}
