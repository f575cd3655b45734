//! Output formatters (HTML, text and JSON)

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

/// Rendering format for the finished tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML document with a nested list
    #[default]
    Html,
    /// Indented text tree
    Text,
    /// JSON object tree
    Json,
}
