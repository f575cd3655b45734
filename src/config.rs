//! Configuration file parsing and validation

pub mod navtree_toml;

pub use navtree_toml::{CONFIG_FILE, Config, OutputConfig, RulesConfig};
