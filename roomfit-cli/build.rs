//! Build script for roomfit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    let format = Arg::new("format")
        .long("format")
        .help("Output format (json, human, csv)")
        .value_name("FORMAT");

    Command::new("roomfit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find room bundles and the cheapest split of a stay")
        .long_about(
            "Search a hotel room snapshot for a bundle matching per-type requests, \
             and split a stay across capped, priced rooms at minimum cost",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rooms")
                .long("rooms")
                .help("Room snapshot file (JSON)")
                .value_name("PATH")
                .global(true)
                .env("ROOMFIT_ROOMS_FILE"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOMFIT_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("combine")
                .about("Find one bundle of rooms satisfying a list of requests")
                .arg(
                    Arg::new("request")
                        .long("request")
                        .short('r')
                        .value_name("TYPE=COUNT")
                        .action(ArgAction::Append)
                        .required(true),
                )
                .arg(Arg::new("max-steps").long("max-steps").value_name("N"))
                .arg(Arg::new("time-limit-ms").long("time-limit-ms").value_name("MS"))
                .arg(format.clone()),
            Command::new("optimize")
                .about("Split a stay across priced rooms at minimum cost")
                .arg(Arg::new("days").long("days").value_name("DAYS").required(true))
                .arg(
                    Arg::new("option")
                        .long("option")
                        .value_name("ID=PRICE:MAXDAYS")
                        .action(ArgAction::Append),
                )
                .arg(Arg::new("type").long("type").value_name("TYPE"))
                .arg(Arg::new("max-days").long("max-days").value_name("DAYS"))
                .arg(format),
            Command::new("generate")
                .about("Generate a synthetic room snapshot")
                .arg(Arg::new("count").long("count").value_name("N"))
                .arg(Arg::new("seed").long("seed").value_name("SEED"))
                .arg(
                    Arg::new("available-ratio")
                        .long("available-ratio")
                        .value_name("RATIO"),
                )
                .arg(Arg::new("output").long("output").short('o').value_name("PATH")),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a roomfit configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("roomfit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
