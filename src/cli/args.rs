//! CLI argument parsing using clap

use crate::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// navtree CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(about = "Render a directory tree as nested navigation, filtered by glob exclusion rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available navtree subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a directory and render the filtered tree
    Build {
        /// Directory to scan (defaults to current directory)
        root: Option<PathBuf>,

        /// Skip the global rule file
        #[arg(long)]
        no_global: bool,

        /// Output format (overrides navtree.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTML document title (overrides navtree.toml)
        #[arg(long)]
        title: Option<String>,

        /// Extra rule applied after all rule files (repeatable)
        #[arg(short = 'e', long = "exclude", value_name = "RULE")]
        exclude: Vec<String>,
    },

    /// Explain whether paths would be included in a scan
    Check {
        /// Paths relative to the scan root
        #[arg(required = true)]
        paths: Vec<String>,

        /// Scan root the paths are relative to (defaults to current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Skip the global rule file
        #[arg(long)]
        no_global: bool,
    },

    /// Create a starter rule file and navtree.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        root: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}
