//! Gas Tally CLI
//!
//! Reports self and total gas for every call in a Lotus execution trace.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gas_tally::commands::{
    display_depth_from_flag, display_version, execute_tally, validate_args, TallyArgs,
};
use gas_tally::parser::DocumentShape;

/// Gas Tally - per-call gas accounting for Lotus execution traces
#[derive(Parser, Debug)]
#[command(name = "gas-tally")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tally a single-root trace (`value.active.ExecutionTrace`)
    Single {
        /// Max call depth to display (values <= 0 display no calls)
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,

        /// Path to trace JSON file
        file: PathBuf,
    },

    /// Tally every top-level message of a replay trace (`Trace[]`)
    Messages {
        /// Max call depth to display (values <= 0 display no calls)
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,

        /// Path to trace JSON file
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    let (shape, depth, file) = match cli.command {
        Commands::Single { depth, file } => (DocumentShape::SingleRoot, depth, file),
        Commands::Messages { depth, file } => (DocumentShape::Messages, depth, file),
        Commands::Version => {
            display_version();
            return Ok(());
        }
    };

    let args = TallyArgs {
        trace_path: file,
        shape,
        display_depth: display_depth_from_flag(depth),
    };

    // Validate args first
    validate_args(&args)?;

    let stdout = std::io::stdout();
    execute_tally(&args, &mut stdout.lock())?;

    Ok(())
}
