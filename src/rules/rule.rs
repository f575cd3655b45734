#![forbid(unsafe_code)]

//! Exclusion rule compilation
//!
//! A rule is one non-blank, non-comment line of a rule file. A leading `!`
//! negates it (re-includes matching paths). A pattern ending in `/` is a
//! directory shorthand and is expanded into four globs so that it matches the
//! named directory and everything beneath it, both at the scan root and at
//! any depth.

use crate::error::RuleError;
use crate::types::RuleSource;
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;

/// Where a compiled rule came from, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOrigin {
    /// Rule file (or other input) the rule was read from
    pub source: RuleSource,
    /// 1-indexed line number within that source
    pub line: usize,
}

impl fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// A compiled exclusion rule
#[derive(Clone)]
pub struct Rule {
    raw: String,
    negated: bool,
    pattern: String,
    matchers: Vec<GlobMatcher>,
    origin: Option<RuleOrigin>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("raw", &self.raw)
            .field("negated", &self.negated)
            .field("globs", &self.globs())
            .field("origin", &self.origin)
            .finish()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Rule {}

impl Rule {
    /// Compiles one rule line
    ///
    /// The line is trimmed, a single leading `!` marks the rule as negated
    /// and the remainder (trimmed again) is the glob pattern.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidGlob` naming the raw rule text if any of the
    /// derived globs fails to compile.
    pub fn compile(raw: &str) -> Result<Self, RuleError> {
        let raw = raw.trim();
        let (negated, rest) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let pattern = rest.trim().to_string();

        let matchers = expand_pattern(&pattern)
            .iter()
            .map(|glob| compile_glob(raw, glob))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rule {
            raw: raw.to_string(),
            negated,
            pattern,
            matchers,
            origin: None,
        })
    }

    /// Attaches the source and line number this rule was read from
    pub fn with_origin(mut self, source: RuleSource, line: usize) -> Self {
        self.origin = Some(RuleOrigin { source, line });
        self
    }

    /// Returns true if any of this rule's matchers matches the path
    ///
    /// The path must be relative to the scan root. Backslashes are treated as
    /// separators.
    pub fn is_match(&self, path: &str) -> bool {
        if path.contains('\\') {
            let normalized = path.replace('\\', "/");
            self.matchers.iter().any(|m| m.is_match(&normalized))
        } else {
            self.matchers.iter().any(|m| m.is_match(path))
        }
    }

    /// The rule text as written, including any leading `!`
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True if the rule re-includes the paths it matches
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The pattern with the `!` prefix and surrounding whitespace removed
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True if the pattern used the trailing-slash directory shorthand
    pub fn is_directory_shorthand(&self) -> bool {
        self.matchers.len() > 1
    }

    /// The glob strings this rule compiled into
    pub fn globs(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.glob().glob()).collect()
    }

    pub fn origin(&self) -> Option<RuleOrigin> {
        self.origin
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Some(origin) => write!(f, "{} ({})", self.raw, origin),
            None => write!(f, "{}", self.raw),
        }
    }
}

/// Expands a pattern into the globs that implement it
///
/// Ordinary patterns compile to themselves. `name/` expands to:
/// `**/name/**`, `name/**`, `**/name` and `name`.
fn expand_pattern(pattern: &str) -> Vec<String> {
    if !pattern.ends_with('/') {
        return vec![pattern.to_string()];
    }

    let name = pattern.trim_end_matches('/');
    vec![
        format!("**/{}/**", name),
        format!("{}/**", name),
        format!("**/{}", name),
        name.to_string(),
    ]
}

/// Compiles a single glob with `*` confined to one path segment
fn compile_glob(raw: &str, glob: &str) -> Result<GlobMatcher, RuleError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| RuleError::InvalidGlob {
            rule: raw.to_string(),
            source: e,
        })
}
