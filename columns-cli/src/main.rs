//! Columns operator tool
//!
//! Checks or scaffolds the installation parameter document that the config
//! screen persists.
//!
//! Usage:
//!   columns validate parameters.json
//!   columns init --content-type article=Article --content-type gallery

use anyhow::Result;
use clap::{Parser, Subcommand};
use columns_cli::{init_document, parse_content_type, validate_file};
use std::{path::PathBuf, process::ExitCode};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "columns")]
#[command(about = "Validate or scaffold Columns installation parameters")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print validation issues; exits non-zero when any are found
    Validate {
        /// Path to the parameter document (JSON)
        file: PathBuf,
    },
    /// Print a fresh default document
    Init {
        /// Known content type as `id` or `id=Name`; repeatable
        #[arg(long = "content-type")]
        content_types: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Validate { file } => {
            let issues = validate_file(&file)?;
            if issues.is_empty() {
                info!("{} is valid", file.display());
                return Ok(ExitCode::SUCCESS);
            }
            for issue in &issues {
                println!("{issue}");
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Init { content_types } => {
            let catalog = content_types
                .iter()
                .map(|raw| parse_content_type(raw))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", init_document(catalog)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
