#![forbid(unsafe_code)]

//! JSON tree output
//!
//! Each directory becomes `{"name", "files", "children"}` with files and
//! children sorted by name.

use crate::engine::TreeNode;
use serde::Serialize;

/// JSON formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format the tree as pretty-printed JSON
    pub fn format(&self, tree: &TreeNode) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(&NodeRecord::from(tree))?;
        json.push('\n');
        Ok(json)
    }
}

/// Serializable, sorted view of a TreeNode
#[derive(Debug, Serialize)]
struct NodeRecord<'a> {
    name: &'a str,
    files: Vec<&'a str>,
    children: Vec<NodeRecord<'a>>,
}

impl<'a> From<&'a TreeNode> for NodeRecord<'a> {
    fn from(node: &'a TreeNode) -> Self {
        NodeRecord {
            name: node.name(),
            files: node.sorted_files(),
            children: node
                .sorted_children()
                .into_iter()
                .map(NodeRecord::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelPath;

    #[test]
    fn test_json_structure() {
        let mut tree = TreeNode::root();
        for path in ["README.md", "a/x.txt", "a/build.rs"] {
            tree.insert_file(&RelPath::new(path));
        }

        let json = JsonFormatter::new().format(&tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "");
        assert_eq!(value["files"], serde_json::json!(["README.md"]));
        assert_eq!(value["children"][0]["name"], "a");
        assert_eq!(
            value["children"][0]["files"],
            serde_json::json!(["build.rs", "x.txt"])
        );
        assert_eq!(value["children"][0]["children"], serde_json::json!([]));
    }
}
