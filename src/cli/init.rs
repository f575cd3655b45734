//! Initialize a navtree project
//!
//! Writes a commented starter rule file and navtree.toml into the scan root.

use crate::config::CONFIG_FILE;
use crate::rules::LOCAL_RULES_FILE;
use std::fs;
use std::path::Path;

/// Default content for .navtreeignore
const DEFAULT_RULES: &str = r#"# navtree exclusion rules
#
# One glob per line, matched against paths relative to this directory.
# Later rules override earlier ones.
#
#   *.log        files ending in .log at the top level
#   **/*.log     files ending in .log anywhere
#   build/       any directory named build, and everything inside it
#   !keep.log    re-include a path excluded by an earlier rule
#
# A directory excluded by a rule is never entered, so a negation rule
# cannot bring back files inside it.

.git/
"#;

/// Default content for navtree.toml
const DEFAULT_CONFIG: &str = r#"[rules]
# Load the user-wide rule file (see NAVTREE_GLOBAL_IGNORE)
global = true
local_file = ".navtreeignore"
# extra = ["*.tmp"]

[output]
format = "html"
title = "Index"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

/// Run the init command
///
/// Creates `.navtreeignore` and `navtree.toml` in `root`.
///
/// # Arguments
/// * `root` - Directory to initialize; must already exist
/// * `force` - If true, overwrite existing files. If false, skip existing files.
pub fn run_init(root: &Path, force: bool) -> Result<InitResult, InitError> {
    if !root.is_dir() {
        return Err(InitError::Path(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let mut result = InitResult::default();
    handle_file(root, LOCAL_RULES_FILE, DEFAULT_RULES, force, &mut result)?;
    handle_file(root, CONFIG_FILE, DEFAULT_CONFIG, force, &mut result)?;
    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    root: &Path,
    name: &str,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path = root.join(name);

    if path.exists() {
        if force {
            fs::write(&path, content)?;
            result.overwritten.push(name.to_string());
        } else {
            result.skipped.push(name.to_string());
        }
    } else {
        fs::write(&path, content)?;
        result.created.push(name.to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rules::loader::parse_rules;
    use crate::types::RuleSource;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_init(temp_dir.path(), false).expect("init should succeed");

        assert_eq!(result.created, vec![LOCAL_RULES_FILE, CONFIG_FILE]);
        assert!(result.skipped.is_empty());
        assert!(result.overwritten.is_empty());
        assert!(temp_dir.path().join(LOCAL_RULES_FILE).is_file());
        assert!(temp_dir.path().join(CONFIG_FILE).is_file());
    }

    #[test]
    fn test_init_skips_existing_files_without_force() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LOCAL_RULES_FILE), "custom\n").unwrap();

        let result = run_init(temp_dir.path(), false).unwrap();
        assert_eq!(result.skipped, vec![LOCAL_RULES_FILE]);
        assert_eq!(result.created, vec![CONFIG_FILE]);
        let content = fs::read_to_string(temp_dir.path().join(LOCAL_RULES_FILE)).unwrap();
        assert_eq!(content, "custom\n");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "garbage").unwrap();

        let result = run_init(temp_dir.path(), true).unwrap();
        assert_eq!(result.overwritten, vec![CONFIG_FILE]);
        let content = fs::read_to_string(temp_dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_init(&temp_dir.path().join("missing"), false);
        assert!(matches!(result, Err(InitError::Path(_))));
    }

    #[test]
    fn test_templates_are_valid() {
        let rules = parse_rules(DEFAULT_RULES, RuleSource::Local).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].raw(), ".git/");

        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }
}
