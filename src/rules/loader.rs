#![forbid(unsafe_code)]

//! Rule file parsing and layered rule set assembly
//!
//! Rules come from up to four sources, concatenated in precedence order:
//! the global rule file, the local rule file at the scan root, the `extra`
//! list from navtree.toml and `--exclude` flags. Missing rule files are
//! treated as empty.

use crate::error::RuleError;
use crate::rules::{Rule, RuleSet};
use crate::types::RuleSource;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default name of the rule file looked up at the scan root
pub const LOCAL_RULES_FILE: &str = ".navtreeignore";

/// Environment variable that overrides the global rule file location
pub const GLOBAL_RULES_ENV: &str = "NAVTREE_GLOBAL_IGNORE";

/// Parses rule file content into compiled rules
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// dropped before compilation. Each rule records its 1-indexed line number.
///
/// # Errors
///
/// Returns `RuleError::InvalidGlob` for the first line that fails to compile.
pub fn parse_rules(content: &str, source: RuleSource) -> Result<Vec<Rule>, RuleError> {
    let mut rules = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        rules.push(Rule::compile(line)?.with_origin(source, idx + 1));
    }

    Ok(rules)
}

/// Loads and parses a rule file
///
/// A file that does not exist yields no rules.
///
/// # Errors
///
/// Returns `RuleError::Io` if the file exists but cannot be read, and
/// `RuleError::InvalidGlob` if a rule fails to compile.
pub fn load_rule_file(path: &Path, source: RuleSource) -> Result<Vec<Rule>, RuleError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No {} rule file at {}", source, path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(RuleError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let rules = parse_rules(&content, source)?;
    log::debug!(
        "Loaded {} {} rule(s) from {}",
        rules.len(),
        source,
        path.display()
    );
    Ok(rules)
}

/// Resolves the global rule file location
///
/// Uses `NAVTREE_GLOBAL_IGNORE` when it is set and non-empty, otherwise
/// `<config dir>/navtree/ignore`. Returns `None` when neither is available.
pub fn global_rules_path() -> Option<PathBuf> {
    if let Some(value) = std::env::var_os(GLOBAL_RULES_ENV)
        && !value.is_empty()
    {
        return Some(PathBuf::from(value));
    }

    dirs::config_dir().map(|dir| dir.join("navtree").join("ignore"))
}

/// Assembles a rule set from layered sources
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    global: Option<PathBuf>,
    local: Option<PathBuf>,
    extra: Vec<(RuleSource, Vec<String>)>,
}

impl RuleLoader {
    /// Creates a loader with no sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global rule file; `None` disables global rules
    pub fn global_file(mut self, path: Option<PathBuf>) -> Self {
        self.global = path;
        self
    }

    /// Sets the local rule file
    pub fn local_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.local = Some(path.into());
        self
    }

    /// Appends inline rules after all previously added sources
    pub fn extra_rules<I, S>(mut self, source: RuleSource, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra
            .push((source, rules.into_iter().map(Into::into).collect()));
        self
    }

    /// Loads every source and builds the ordered rule set
    ///
    /// # Errors
    ///
    /// Returns the first `RuleError` from any source.
    pub fn load(&self) -> Result<RuleSet, RuleError> {
        let mut rules = Vec::new();

        if let Some(path) = &self.global {
            rules.extend(load_rule_file(path, RuleSource::Global)?);
        }

        if let Some(path) = &self.local {
            rules.extend(load_rule_file(path, RuleSource::Local)?);
        }

        for (source, lines) in &self.extra {
            rules.extend(parse_rules(&lines.join("\n"), *source)?);
        }

        log::debug!("Rule set assembled with {} rule(s)", rules.len());
        Ok(RuleSet::new(rules))
    }
}
