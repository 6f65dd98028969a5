//! orchestrate CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{ArgAction, Parser};
use orchestrate_cli_lib::commands::SetupCommand;
use orchestrate_cli_lib::config::InstallConfig;

#[derive(Parser)]
#[command(name = "orchestrate")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Install orchestration workflow templates into the current project",
    long_about = None
)]
struct Cli {
    /// Install every workflow template without prompting
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Print version
    // clap prints and exits on this flag; the field itself is never read.
    #[allow(dead_code)]
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SetupCommand::new(InstallConfig::bundled(), cli.all).execute()
}
