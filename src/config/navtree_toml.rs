//! Parsing and validation for navtree.toml configuration files

use crate::error::ConfigError;
use crate::output::OutputFormat;
use crate::output::html::DEFAULT_TITLE;
use crate::rules::{LOCAL_RULES_FILE, Rule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the optional project configuration file at the scan root
pub const CONFIG_FILE: &str = "navtree.toml";

/// Main configuration struct for navtree.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule source configuration
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Load `navtree.toml` from the scan root, or the defaults if it is absent
    pub fn load_from_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        match fs::metadata(&path) {
            Ok(_) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io { path, source: e }),
        }
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.local_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "rules.local_file must not be empty".to_string(),
            ));
        }

        for rule in &self.rules.extra {
            let line = rule.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            Rule::compile(line).map_err(|e| {
                ConfigError::Validation(format!("Invalid rule in rules.extra: {}", e))
            })?;
        }

        Ok(())
    }
}

/// Rules configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Whether the global rule file is loaded
    #[serde(default = "default_true")]
    pub global: bool,

    /// Rule file name at the scan root
    #[serde(default = "default_local_file")]
    pub local_file: String,

    /// Rules applied after the local rule file
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            global: true,
            local_file: default_local_file(),
            extra: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_local_file() -> String {
    LOCAL_RULES_FILE.to_string()
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// HTML document title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
