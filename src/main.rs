//! navtree CLI entry point

use clap::Parser;
use navtree::cli::common::EXIT_ERROR;
use navtree::cli::{BuildOptions, Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.quiet, cli.verbose);
    log::debug!("CLI args parsed: {:?}", cli);

    let exit_code = match cli.command {
        Command::Build {
            root,
            no_global,
            format,
            output,
            title,
            exclude,
        } => navtree::cli::build::run_build(
            BuildOptions {
                root,
                no_global,
                format,
                output,
                title,
                exclude,
            },
            cli.color,
        ),
        Command::Check {
            paths,
            root,
            no_global,
        } => navtree::cli::check::run_check(&paths, root, no_global),
        Command::Init { root, force } => {
            let root = root.unwrap_or_else(|| std::path::PathBuf::from("."));
            match navtree::cli::init::run_init(&root, force) {
                Ok(result) => {
                    for name in &result.created {
                        println!("Created {}", name);
                    }
                    for name in &result.overwritten {
                        println!("Overwrote {}", name);
                    }
                    for name in &result.skipped {
                        println!("Skipped {} (already exists, use --force to overwrite)", name);
                    }
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    EXIT_ERROR
                }
            }
        }
    };

    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", level);
}
