//! Main entry point for the roomfit CLI.
//!
//! - `combine`: Find one bundle of rooms satisfying a list of requests
//! - `optimize`: Split a stay across priced rooms at minimum cost
//! - `generate`: Generate a synthetic room snapshot

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route `log` output through our logger; a second install is harmless
    if let Err(e) = roomfit::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        rooms: cli.rooms,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Combine(cmd) => cmd.execute(&global),
        cli::Command::Optimize(cmd) => cmd.execute(&global),
        cli::Command::Generate(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
