#![forbid(unsafe_code)]

//! HTML navigation output
//!
//! Renders the tree as a standalone HTML document containing a nested
//! `<ul>` list. Directories are collapsible `<details>` elements listed
//! before files; both are sorted by name. Files link to their path relative
//! to the scan root.

use crate::engine::TreeNode;

/// Default document title
pub const DEFAULT_TITLE: &str = "Index";

/// HTML document formatter
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    title: String,
}

impl HtmlFormatter {
    /// Creates a formatter with the given document title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Format the tree as a complete HTML document
    pub fn format(&self, tree: &TreeNode) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n");
        output.push_str("<html lang=\"en\">\n");
        output.push_str("<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str("<nav>\n");
        output.push_str(&self.format_list(tree));
        output.push_str("</nav>\n");
        output.push_str("</body>\n");
        output.push_str("</html>\n");

        output
    }

    /// Format only the nested list, without the surrounding document
    pub fn format_list(&self, tree: &TreeNode) -> String {
        let mut output = String::new();
        write_list(tree, "", 0, &mut output);
        output
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

fn write_list(node: &TreeNode, prefix: &str, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{}<ul>\n", indent));

    for child in node.sorted_children() {
        let path = format!("{}{}/", prefix, child.name());
        out.push_str(&format!(
            "{}  <li><details open><summary>{}/</summary>\n",
            indent,
            escape_html(child.name())
        ));
        write_list(child, &path, depth + 2, out);
        out.push_str(&format!("{}  </details></li>\n", indent));
    }

    for file in node.sorted_files() {
        let path = format!("{}{}", prefix, file);
        out.push_str(&format!(
            "{}  <li><a href=\"{}\">{}</a></li>\n",
            indent,
            escape_html(&encode_href(&path)),
            escape_html(file)
        ));
    }

    out.push_str(&format!("{}</ul>\n", indent));
}

/// Escapes the characters that are significant in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encodes a relative path for use as a URL, keeping `/` separators
fn encode_href(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
