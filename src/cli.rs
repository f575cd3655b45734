//! CLI argument parsing and command dispatch

pub mod args;
pub mod build;
pub mod check;
pub mod common;
pub mod init;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command};
pub use build::BuildOptions;
