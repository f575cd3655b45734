//! Build command implementation
//!
//! This module implements the `navtree build` command, which:
//! - Loads navtree.toml from the scan root (if present)
//! - Assembles the layered rule set
//! - Scans the root into a filtered tree
//! - Renders the tree (HTML, text or JSON)
//! - Writes it to a file or stdout

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_SUCCESS, exit_code_for};
use crate::engine::{TreeBuilder, TreeNode};
use crate::error::{NavtreeError, OutputError};
use crate::output::{HtmlFormatter, JsonFormatter, OutputFormat, TextFormatter};
use std::fs;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use termcolor::StandardStream;

/// Options for a single build run, after CLI parsing
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub root: Option<PathBuf>,
    pub no_global: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub exclude: Vec<String>,
}

/// Run the build command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (I/O or scan error)
/// - 3: Parse error (invalid navtree.toml or rule)
pub fn run_build(options: BuildOptions, color: ColorChoice) -> i32 {
    match run_build_inner(options, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_build_inner(options: BuildOptions, color: ColorChoice) -> Result<(), NavtreeError> {
    let root = super::common::resolve_root(options.root)?;
    let config = super::common::load_config(&root)?;
    let rules = super::common::load_rules(&root, &config, options.no_global, &options.exclude)?;

    log::info!(
        "Scanning {} with {} rule(s)",
        root.display(),
        rules.len()
    );
    let tree = TreeBuilder::new(&root, rules).build()?;
    log::info!("Found {} file(s)", tree.file_count());

    let format = options.format.unwrap_or(config.output.format);
    let title = options.title.unwrap_or(config.output.title);

    match options.output {
        Some(path) => {
            let rendered = render(&tree, format, &title)?;
            fs::write(&path, rendered).map_err(OutputError::from)?;
            log::info!("Wrote {}", path.display());
        }
        None => write_stdout(&tree, format, &title, color)?,
    }

    Ok(())
}

/// Render the tree to a string in the requested format
///
/// Text output is never colored here.
pub fn render(tree: &TreeNode, format: OutputFormat, title: &str) -> Result<String, OutputError> {
    match format {
        OutputFormat::Html => Ok(HtmlFormatter::new(title).format(tree)),
        OutputFormat::Text => Ok(TextFormatter::new().format(tree)),
        OutputFormat::Json => Ok(JsonFormatter::new().format(tree)?),
    }
}

fn write_stdout(
    tree: &TreeNode,
    format: OutputFormat,
    title: &str,
    color: ColorChoice,
) -> Result<(), OutputError> {
    if format == OutputFormat::Text {
        let mut stdout = StandardStream::stdout(resolve_color(color));
        TextFormatter::new().write(tree, &mut stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    let rendered = render(tree, format, title)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn resolve_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}
