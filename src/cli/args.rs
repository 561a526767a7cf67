//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prepare and run Doxygen for source trees
#[derive(Parser, Debug)]
#[command(name = "doxyprep")]
#[command(about = "Prepare and run Doxygen for source trees")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a source tree, write a Doxyfile, and run doxygen
    Generate {
        /// Root of the source tree to document
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Name of the docs output directory
        #[arg(short, long)]
        output: Option<String>,

        /// Source extensions to recognize (can be repeated; replaces the default set)
        #[arg(long = "ext")]
        extensions: Vec<String>,

        /// Glob patterns for directories to skip (can be repeated)
        #[arg(long)]
        exclude: Vec<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Leave .gitignore untouched
        #[arg(long)]
        no_gitignore: bool,

        /// Write the Doxyfile but do not run doxygen
        #[arg(long)]
        no_run: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
