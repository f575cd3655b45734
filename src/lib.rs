#![forbid(unsafe_code)]

//! navtree: render a directory tree as nested navigation
//!
//! navtree scans a directory, filters entries through an ordered list of
//! glob exclusion rules drawn from a global and a local rule file, and
//! renders the surviving files as a nested list (HTML, text or JSON).

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, NavtreeError, OutputError, RuleError, ScanError};

// Re-export core domain types for convenient access
pub use engine::{TreeBuilder, TreeNode};
pub use rules::{Rule, RuleSet};
pub use types::{RelPath, RuleSource};
