//! Config given as command line arguments

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser};

use crate::build_info::build_info;

#[derive(Args, Debug, Clone)]
pub struct ArgsConfig {
    /// Print build info and quit.
    #[arg(short, long)]
    pub build_info: bool,

    #[command(subcommand)]
    pub mode: Option<AppMode>,
}

#[derive(Parser, Debug, Clone)]
pub enum AppMode {
    /// Print API documentation JSON to stdout
    OpenApi,
    /// Validate a profile update request JSON document and print
    /// the violated constraints
    CheckRequest {
        /// Path to the request JSON document
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// Define main CLI arguments struct here, so that
// correct version and other information from Cargo.toml
// is added to CLI.

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub args: ArgsConfig,
}

pub fn get_config() -> Result<ArgsConfig, ExitCode> {
    let matches = Cli::parse();

    if matches.args.build_info {
        println!("{}", build_info());
        Err(ExitCode::SUCCESS)
    } else {
        Ok(matches.args)
    }
}
