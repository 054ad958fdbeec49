//! Command-line interface implementation for Sprout.
//! Provides argument parsing and help text formatting using clap.

use crate::create::CreateCommand;
use clap::{Parser, Subcommand};

/// Command-line arguments structure for Sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "sprout: starter-kit project generator", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from a template
    Create(CreateCommand),
}

/// Parses command line arguments and returns the Args structure.
///
/// Missing arguments and unknown subcommands fall through to clap's own
/// usage output.
pub fn get_args() -> Args {
    Args::parse()
}
