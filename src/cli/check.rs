//! Check command implementation
//!
//! `navtree check` reports, for each path, whether a scan would include it
//! and which rule decided. A path whose ancestor directory is excluded is
//! reported as pruned even when its own verdict is "included", because the
//! scan never enters that directory.

use crate::cli::common::{EXIT_SUCCESS, exit_code_for};
use crate::error::NavtreeError;
use crate::rules::{Rule, RuleSet};
use crate::types::RelPath;
use std::path::{Path, PathBuf};

/// Outcome of checking a single path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathVerdict {
    /// Included; carries the deciding negation rule, if any
    Included { rule: Option<String> },
    /// Excluded by a rule matching the path itself
    Excluded { rule: String },
    /// Never visited because an ancestor directory is excluded
    Pruned { ancestor: RelPath, rule: String },
}

/// Decide the verdict for one path relative to the scan root
pub fn check_path(rules: &RuleSet, path: &RelPath) -> PathVerdict {
    if let Some(ancestor) = rules.excluded_ancestor(path) {
        let rule = describe(rules.explain(ancestor.as_str()));
        return PathVerdict::Pruned { ancestor, rule };
    }

    if rules.is_included(path.as_str()) {
        PathVerdict::Included {
            rule: rules.explain(path.as_str()).map(Rule::to_string),
        }
    } else {
        PathVerdict::Excluded {
            rule: describe(rules.explain(path.as_str())),
        }
    }
}

fn describe(rule: Option<&Rule>) -> String {
    rule.map(Rule::to_string).unwrap_or_default()
}

/// Format one verdict as a report line
pub fn format_verdict(path: &RelPath, verdict: &PathVerdict) -> String {
    match verdict {
        PathVerdict::Included { rule: Some(rule) } => {
            format!("included  {}  [re-included by {}]", path, rule)
        }
        PathVerdict::Included { rule: None } => format!("included  {}", path),
        PathVerdict::Excluded { rule } => format!("excluded  {}  [{}]", path, rule),
        PathVerdict::Pruned { ancestor, rule } => format!(
            "excluded  {}  [inside excluded directory {}: {}]",
            path, ancestor, rule
        ),
    }
}

/// Run the check command
///
/// Prints one line per path and returns the exit code.
pub fn run_check(paths: &[String], root: Option<PathBuf>, no_global: bool) -> i32 {
    match run_check_inner(paths, root, no_global) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_check_inner(
    paths: &[String],
    root: Option<PathBuf>,
    no_global: bool,
) -> Result<Vec<String>, NavtreeError> {
    let root = super::common::resolve_root(root)?;
    let config = super::common::load_config(&root)?;
    let rules = super::common::load_rules(&root, &config, no_global, &[])?;

    Ok(paths
        .iter()
        .map(|raw| {
            let path = relative_to_root(&root, raw);
            format_verdict(&path, &check_path(&rules, &path))
        })
        .collect())
}

/// Interpret a command-line path relative to the scan root
///
/// Absolute paths under the root are made relative; anything else is taken
/// as already relative.
fn relative_to_root(root: &Path, raw: &str) -> RelPath {
    let path = Path::new(raw);
    match path.strip_prefix(root) {
        Ok(rel) if path.is_absolute() => RelPath::from_path(rel),
        _ => RelPath::new(raw),
    }
}
