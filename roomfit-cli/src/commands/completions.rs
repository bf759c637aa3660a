//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "roomfit";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            Self::print_instructions(self.shell);
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }

    fn print_instructions(shell: Shell) {
        eprintln!("# Generating {shell} completion script");
        match shell {
            Shell::Bash => {
                eprintln!("#   roomfit completions bash > ~/.local/share/bash-completion/completions/roomfit");
                eprintln!("# Or add to ~/.bashrc:");
                eprintln!("#   eval \"$(roomfit completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   roomfit completions zsh > ~/.zsh/completions/_roomfit");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   roomfit completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   roomfit completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();
    }
}
