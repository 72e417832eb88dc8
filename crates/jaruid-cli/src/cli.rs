//! CLI argument definitions.
//!
//! Uses `clap` derive macros to define the command surface. The `analyze`
//! subcommand corresponds to the handler in [`super::commands::analyze`].

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jaruid",
    version,
    about = "Identify the Maven coordinates of unlabeled jar files",
    long_about = "jaruid inspects jar files of unknown origin, proposes Maven \
                  coordinates from their manifest, filenames, embedded POM, \
                  and class layout, then verifies those proposals against \
                  configured Maven repositories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze jar files and report their likely Maven coordinates
    Analyze {
        /// Jar files or directories to analyze
        #[arg(long = "jars", required = true, num_args = 1..)]
        jars: Vec<String>,

        /// Where to write the JSON report. Supports a `{datetime}` placeholder
        #[arg(long = "report-file")]
        report_file: Option<String>,

        /// Skip online verification against remote repositories
        #[arg(long)]
        offline: bool,

        /// Maximum number of jars to analyze
        #[arg(long)]
        limit: Option<usize>,

        /// Skip jars that cannot be resolved instead of prompting
        #[arg(long)]
        skip_not_found: bool,

        /// Always emit every candidate, not just the selected one
        #[arg(long)]
        force_detailed_output: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
