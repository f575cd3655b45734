#![forbid(unsafe_code)]

//! Plain-text tree output
//!
//! Draws the tree with box-drawing guides, directories first. Directory
//! names are colored when the writer supports color.

use crate::engine::TreeNode;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Text tree formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        TextFormatter
    }

    /// Format the tree as an uncolored string
    pub fn format(&self, tree: &TreeNode) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer cannot fail
        let _ = self.write(tree, &mut buffer);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Write the tree to a color-capable writer
    pub fn write(&self, tree: &TreeNode, out: &mut dyn WriteColor) -> io::Result<()> {
        writeln!(out, ".")?;
        write_entries(tree, "", out)
    }
}

fn write_entries(node: &TreeNode, prefix: &str, out: &mut dyn WriteColor) -> io::Result<()> {
    let children = node.sorted_children();
    let files = node.sorted_files();
    let total = children.len() + files.len();

    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == total;
        write!(out, "{}{}", prefix, branch(last))?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}/", child.name())?;
        out.reset()?;
        writeln!(out)?;

        let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
        write_entries(child, &nested, out)?;
    }

    for (idx, file) in files.iter().enumerate() {
        let last = children.len() + idx + 1 == total;
        writeln!(out, "{}{}{}", prefix, branch(last), file)?;
    }

    Ok(())
}

fn branch(last: bool) -> &'static str {
    if last { "└── " } else { "├── " }
}
