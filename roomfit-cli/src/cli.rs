//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CombineCommand, CompletionsCommand, GenerateCommand, OptimizeCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for room bundle search and stay cost optimization.
#[derive(Parser)]
#[command(name = "roomfit")]
#[command(
    version,
    about = "Find room bundles and the cheapest split of a stay",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Room snapshot file (JSON)
    #[arg(long, value_name = "PATH", global = true, env = "ROOMFIT_ROOMS_FILE")]
    pub rooms: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMFIT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find one bundle of rooms satisfying a list of requests
    Combine(CombineCommand),

    /// Split a stay across priced rooms at minimum cost
    Optimize(OptimizeCommand),

    /// Generate a synthetic room snapshot
    Generate(GenerateCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
