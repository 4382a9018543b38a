//! # linksmith-cli
//!
//! Create symbolic links, junctions and hardlinks from the command line.
//!
//! This is the main entry point for the linksmith tool. It handles command
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use linksmith_core::error::LinkResult;
use std::process::ExitCode;
use tracing::{debug, error};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Create symbolic links, junctions and hardlinks
#[derive(Parser)]
#[command(name = "linksmith", version, about = "Create filesystem links through the host link tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Column width of error reports
    #[arg(long, global = true, value_name = "N")]
    pub report_width: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a link
    Create {
        /// Path of the link to create
        name: String,
        /// Existing file or directory the link points at
        destination: String,
        /// Link type (symbolic, junction, hardlink)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        link_type: Option<String>,
        /// Ask before running the link command
        #[arg(long)]
        confirm: bool,
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// List symbolic links and junctions in a directory
    List {
        /// Directory to search (defaults to the current directory)
        dir: Option<Utf8PathBuf>,
        /// Only show links whose file name matches this glob
        #[arg(long, value_name = "GLOB")]
        filter: Option<String>,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting linksmith v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", ErrorFormatter::new().format_error(&e));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> LinkResult<()> {
    let ctx = CommandContext::new(cli.report_width)?;
    commands::dispatch_command(cli.command, &ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "linksmith={level},linksmith_core={level},linksmith_config={level},linksmith_link={level}"
        ))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("linksmith encountered an unexpected error: {}", panic_info);
        eprintln!("linksmith crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/linksmith/linksmith/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
