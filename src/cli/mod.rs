//! Command-line interface for lemon-merger.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::TIMESTAMP_FORMAT;
use crate::{merge, render};

/// Merge the LemonUI C# sources into a single distributable file for RageMP
#[derive(Parser)]
#[command(name = "lemon-merger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the C# sources to merge
    #[arg(value_name = "CODE_SOURCE")]
    pub input_dir: PathBuf,

    /// Path of the merged file to write
    #[arg(value_name = "CODE_OUTPUT")]
    pub output_file: PathBuf,

    /// Extra comment appended to the generated-on header line
    #[arg(value_name = "COMMENT")]
    pub comment: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    match Cli::try_parse() {
        Ok(cli) => {
            init_logging(cli.verbose);
            execute(cli)
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(())
        }
        Err(_) => {
            // Anything other than two or three positional arguments: one
            // error-level usage line, exit 1, before any file I/O.
            init_logging(false);
            error!("Expected 2 or 3 arguments: [code source] [code output] {{comment}}");
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    info!("Launch Arguments: {:?}", std::env::args().collect::<Vec<_>>());
    info!("Starting the processing of the files");

    let merged = merge::merge_tree(&cli.input_dir)?;

    info!(
        "Adding {} unique using statements: {}",
        merged.unique_using_count(),
        merged.usings().collect::<Vec<_>>().join(", ")
    );

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let document =
        render::render_document(&timestamp, cli.comment.as_deref(), merged.usings(), merged.bodies());
    render::write_output(&cli.output_file, &document)
}

// RUST_LOG in the environment always takes precedence; --verbose raises the
// fallback level from INFO to DEBUG.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
