//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for resolving the scan root,
//! loading configuration and assembling the rule set.

use crate::config::Config;
use crate::error::{ConfigError, NavtreeError, RuleError};
use crate::rules::{RuleLoader, RuleSet, global_rules_path};
use crate::types::RuleSource;
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Resolve the scan root, defaulting to the current directory
pub(crate) fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir(),
    }
}

/// Load navtree.toml from the scan root (defaults when absent)
pub(crate) fn load_config(root: &Path) -> Result<Config, ConfigError> {
    Config::load_from_root(root)
}

/// Build the ordered rule set for a scan
///
/// Order: global rule file (unless disabled by `no_global` or the config),
/// local rule file, `rules.extra` from the config, then command-line rules.
///
/// # Errors
///
/// Returns `RuleError` if a rule file cannot be read or a rule fails to compile.
pub(crate) fn load_rules(
    root: &Path,
    config: &Config,
    no_global: bool,
    command_line: &[String],
) -> Result<RuleSet, RuleError> {
    let global = if no_global || !config.rules.global {
        log::debug!("Global rules disabled");
        None
    } else {
        global_rules_path()
    };

    RuleLoader::new()
        .global_file(global)
        .local_file(root.join(&config.rules.local_file))
        .extra_rules(RuleSource::Config, config.rules.extra.iter().cloned())
        .extra_rules(RuleSource::CommandLine, command_line.iter().cloned())
        .load()
}

/// Map an error to the process exit code
pub(crate) fn exit_code_for(error: &NavtreeError) -> i32 {
    match error {
        NavtreeError::Config(ConfigError::Parse(_))
        | NavtreeError::Config(ConfigError::Validation(_))
        | NavtreeError::Rule(RuleError::InvalidGlob { .. }) => EXIT_PARSE_ERROR,
        _ => EXIT_ERROR,
    }
}
