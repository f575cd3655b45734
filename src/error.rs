//! Error types for navtree
//!
//! This module defines the error types used throughout navtree, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but contains an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A rule whose glob syntax cannot be compiled
    #[error("Invalid glob pattern in rule '{rule}': {source}")]
    InvalidGlob {
        rule: String,
        source: globset::Error,
    },

    /// A rule file exists but could not be read
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while traversing the scan root
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory
    #[error("Scan root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    /// A directory could not be read during traversal
    #[error("Failed to scan: {0}")]
    Walk(#[from] ignore::Error),
}

/// Errors raised while rendering or writing the finished tree
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Failed to write the rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the tree as JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error type for navtree
#[derive(Debug, thiserror::Error)]
pub enum NavtreeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Traversal error
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Output error
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
