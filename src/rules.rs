#![forbid(unsafe_code)]

//! Exclusion rules: compilation, ordered rule sets and rule file loading

pub mod loader;
mod rule;
mod rule_set;

// Re-export core types
pub use loader::{GLOBAL_RULES_ENV, LOCAL_RULES_FILE, RuleLoader, global_rules_path};
pub use rule::{Rule, RuleOrigin};
pub use rule_set::RuleSet;
