//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading, snapshot resolution and output format selection.

use crate::error::CliError;
use roomfit::{Config, ConfigBuilder, OutputFormat, RoomSnapshot};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Room snapshot file given on the command line.
    pub rooms: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration files
/// 3. Built-in defaults
///
/// Command-line flags are applied by each command on top of the result.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve and load the room snapshot.
///
/// `--rooms` (or `ROOMFIT_ROOMS_FILE`) wins over `rooms_file` from the
/// configuration files.
pub fn load_snapshot(global: &GlobalOptions, config: &Config) -> Result<RoomSnapshot, CliError> {
    let path = global
        .rooms
        .clone()
        .or_else(|| config.rooms_file.clone())
        .ok_or_else(|| {
            CliError::InvalidArguments(
                "no rooms file given (use --rooms or set rooms_file in roomfit.yaml)".to_string(),
            )
        })?;

    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "rooms file not found: {}",
            path.display()
        )));
    }

    let snapshot = RoomSnapshot::load(&path)?;
    log::info!("loaded {} room(s) from {}", snapshot.len(), path.display());
    Ok(snapshot)
}

/// Pick the output format: the command's `--format` flag, then the
/// configuration, then JSON.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output_format_or_default())
}
