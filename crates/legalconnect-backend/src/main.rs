#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod api_doc;
pub mod args;
pub mod build_info;

use std::{path::Path, process::ExitCode};

use model_profile::ProfileUpdate;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{api_doc::ApiDoc, args::AppMode};

fn main() -> ExitCode {
    let args = match args::get_config() {
        Ok(args) => args,
        Err(e) => return e,
    };

    match args.mode {
        // No logging setup before this, so that stdout only contains
        // the document.
        Some(AppMode::OpenApi) => match ApiDoc::open_api_json_string() {
            Ok(doc) => {
                println!("{doc}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Writing API documentation failed: {e}");
                ExitCode::FAILURE
            }
        },
        Some(AppMode::CheckRequest { file }) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();
            info!("{}", build_info::build_info());
            handle_check_request_mode(&file)
        }
        None => {
            let mut command = <args::Cli as clap::CommandFactory>::command();
            let _ = command.print_help();
            ExitCode::FAILURE
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CheckRequestError {
    #[error("Reading request file failed")]
    Read(#[from] std::io::Error),
    #[error("Request JSON parsing failed")]
    Parse(#[from] serde_json::Error),
}

fn read_request(file: &Path) -> Result<ProfileUpdate, CheckRequestError> {
    let text = std::fs::read_to_string(file)?;
    let update = serde_json::from_str(&text)?;
    Ok(update)
}

fn handle_check_request_mode(file: &Path) -> ExitCode {
    let update = match read_request(file) {
        Ok(update) => update,
        Err(e) => {
            warn!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match update.validate() {
        Ok(_) => {
            info!("Request is valid");
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for error in errors.errors() {
                warn!("{}: {}", error.field, error.message);
            }
            ExitCode::FAILURE
        }
    }
}
