#![forbid(unsafe_code)]

//! Core domain types for navtree
//!
//! This module defines the fundamental types used throughout the navtree system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Where a rule was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    /// The user-wide rule file
    Global,
    /// The rule file at the scan root
    Local,
    /// The `extra` list of navtree.toml
    Config,
    /// `--exclude` flags on the command line
    CommandLine,
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleSource::Global => "global",
            RuleSource::Local => "local",
            RuleSource::Config => "config",
            RuleSource::CommandLine => "command-line",
        };
        write!(f, "{}", name)
    }
}

/// A path relative to the scan root, normalized for glob matching
///
/// Paths always use forward slashes, have no leading "./" and no trailing
/// slash. The scan root itself is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelPath(String);

impl RelPath {
    /// Creates a new RelPath with normalization
    pub fn new(path: impl Into<String>) -> Self {
        RelPath(Self::normalize(path.into()))
    }

    /// Builds a RelPath from the components of a relative filesystem path
    pub fn from_path(path: &Path) -> Self {
        let joined = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(joined)
    }

    /// Normalizes a path:
    /// - Convert backslashes to forward slashes
    /// - Remove leading "./" segments
    /// - Remove trailing slashes
    /// - "." becomes the empty root path
    fn normalize(mut path: String) -> String {
        if path.contains('\\') {
            path = path.replace('\\', "/");
        }

        while let Some(rest) = path.strip_prefix("./") {
            path = rest.to_string();
        }

        while path.ends_with('/') {
            path.pop();
        }

        if path == "." {
            path.clear();
        }

        path
    }

    /// Returns true for the scan root
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment of the path
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Iterates over the strict ancestors of this path, nearest the root first
    ///
    /// For `a/b/c` this yields `a` then `a/b`.
    pub fn ancestors(&self) -> impl Iterator<Item = RelPath> + '_ {
        self.0
            .match_indices('/')
            .map(|(idx, _)| RelPath(self.0[..idx].to_string()))
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RelPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(RelPath::new(value))
    }
}

impl From<RelPath> for String {
    fn from(path: RelPath) -> Self {
        path.0
    }
}

impl From<&str> for RelPath {
    fn from(path: &str) -> Self {
        RelPath::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rel_path_normalization() {
        assert_eq!(RelPath::new("").as_str(), "");
        assert_eq!(RelPath::new(".").as_str(), "");
        assert_eq!(RelPath::new("./").as_str(), "");
        assert_eq!(RelPath::new("src").as_str(), "src");
        assert_eq!(RelPath::new("src/").as_str(), "src");
        assert_eq!(RelPath::new("./src").as_str(), "src");
        assert_eq!(RelPath::new("src\\parser").as_str(), "src/parser");
        assert_eq!(RelPath::new("src\\parser\\").as_str(), "src/parser");
    }

    #[test]
    fn test_rel_path_from_path() {
        let path: PathBuf = ["a", "build", "out.txt"].iter().collect();
        assert_eq!(RelPath::from_path(&path).as_str(), "a/build/out.txt");
    }

    #[test]
    fn test_rel_path_file_name() {
        assert_eq!(RelPath::new("a/b/c.txt").file_name(), "c.txt");
        assert_eq!(RelPath::new("README.md").file_name(), "README.md");
        assert_eq!(RelPath::new("").file_name(), "");
    }

    #[test]
    fn test_rel_path_ancestors() {
        let ancestors: Vec<_> = RelPath::new("a/b/c").ancestors().collect();
        assert_eq!(ancestors, vec![RelPath::new("a"), RelPath::new("a/b")]);
        assert_eq!(RelPath::new("top").ancestors().count(), 0);
    }

    #[test]
    fn test_rule_source_display() {
        assert_eq!(RuleSource::Global.to_string(), "global");
        assert_eq!(RuleSource::Local.to_string(), "local");
        assert_eq!(RuleSource::CommandLine.to_string(), "command-line");
    }

    #[test]
    fn test_rule_source_serialization() {
        let json = serde_json::to_string(&RuleSource::Config).unwrap();
        assert_eq!(json, "\"config\"");
    }
}
