#![forbid(unsafe_code)]

//! Ordered rule sets and the inclusion decision
//!
//! Rules are evaluated in order and the last matching rule wins. A path that
//! no rule matches is included.

use crate::error::RuleError;
use crate::rules::Rule;
use crate::types::RelPath;

/// An ordered, immutable list of compiled rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from rules in precedence order (lowest first)
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compiles a rule set from pattern strings without origin information
    ///
    /// # Errors
    ///
    /// Returns the first `RuleError` encountered.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| Rule::compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Decides whether a path relative to the scan root is included
    ///
    /// Every rule is consulted in order; each matching rule overwrites the
    /// running verdict, so the last match decides. This is a pure function of
    /// the path and the rule set.
    pub fn is_included(&self, path: &str) -> bool {
        self.rules.iter().fold(true, |included, rule| {
            if rule.is_match(path) {
                rule.is_negated()
            } else {
                included
            }
        })
    }

    /// Returns the rule that decides the verdict for a path, if any matches
    pub fn explain(&self, path: &str) -> Option<&Rule> {
        self.rules.iter().rev().find(|rule| rule.is_match(path))
    }

    /// Returns the outermost ancestor directory of `path` that is excluded
    ///
    /// A traversal never enters an excluded directory, so when this returns
    /// `Some` the path cannot appear in a scan regardless of its own verdict.
    pub fn excluded_ancestor(&self, path: &RelPath) -> Option<RelPath> {
        path.ancestors()
            .find(|ancestor| !self.is_included(ancestor.as_str()))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
