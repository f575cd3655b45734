//! Directory traversal and tree assembly
//!
//! The scan root is walked depth-first with the ignore crate. Every entry is
//! checked against the rule set before it is yielded; an excluded directory
//! is never entered, so nothing beneath it can reach the tree even if a later
//! negation rule would include it on its own. Only files are inserted and
//! their ancestor nodes are created on demand, so a directory with no
//! surviving files never appears.

use crate::error::ScanError;
use crate::rules::RuleSet;
use crate::types::RelPath;
use ignore::{DirEntry, WalkBuilder};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A directory in the filtered tree
///
/// The scan root has an empty name. Children and files are unordered;
/// renderers sort them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    children: HashMap<String, TreeNode>,
    files: HashSet<String>,
}

impl TreeNode {
    /// Creates the unnamed root node
    pub fn root() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Inserts a file at `path`, creating missing ancestor directories
    ///
    /// Inserting the same path twice leaves a single entry.
    pub fn insert_file(&mut self, path: &RelPath) {
        if path.is_root() {
            return;
        }

        let mut segments: Vec<&str> = path.as_str().split('/').collect();
        let Some(file_name) = segments.pop() else {
            return;
        };

        let mut node = self;
        for segment in segments {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::named(segment));
        }
        node.files.insert(file_name.to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &HashMap<String, TreeNode> {
        &self.children
    }

    pub fn files(&self) -> &HashSet<String> {
        &self.files
    }

    /// Returns a direct child directory by name
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Looks up a descendant directory by relative path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let path = RelPath::new(path);
        if path.is_root() {
            return Some(self);
        }
        path.as_str()
            .split('/')
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Children sorted by name
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        let mut children: Vec<_> = self.children.values().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// File names sorted lexicographically
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<_> = self.files.iter().map(String::as_str).collect();
        files.sort_unstable();
        files
    }

    /// True if the node has neither files nor child directories
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// Number of files in this node and all descendants
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .values()
                .map(TreeNode::file_count)
                .sum::<usize>()
    }

    /// Number of directories below this node
    pub fn dir_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(TreeNode::dir_count)
                .sum::<usize>()
    }

    /// Every file path in the tree, relative to this node, sorted
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths.sort();
        paths
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for file in &self.files {
            out.push(format!("{}{}", prefix, file));
        }
        for (name, child) in &self.children {
            child.collect_paths(&format!("{}{}/", prefix, name), out);
        }
    }
}

/// Builds a filtered TreeNode from a directory on disk
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root: PathBuf,
    rules: Arc<RuleSet>,
}

impl TreeBuilder {
    /// Creates a builder for the given scan root and rule set
    pub fn new(root: impl Into<PathBuf>, rules: RuleSet) -> Self {
        Self {
            root: root.into(),
            rules: Arc::new(rules),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Walks the scan root and returns the filtered tree
    ///
    /// Symbolic links are neither followed nor recorded.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::RootNotDirectory` if the root is not a directory and
    /// `ScanError::Walk` for the first entry that cannot be read. There is no
    /// partial result.
    pub fn build(&self) -> Result<TreeNode, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::RootNotDirectory(self.root.clone()));
        }

        let root = self.root.clone();
        let rules = Arc::clone(&self.rules);

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| admit(&root, &rules, entry))
            .build();

        let mut tree = TreeNode::root();

        for result in walker {
            let entry = result?;
            if entry.depth() == 0 {
                continue;
            }

            // Directories are implied by the files beneath them
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = relative_path(&self.root, entry.path());
            log::trace!("Including {}", path);
            tree.insert_file(&path);
        }

        log::debug!(
            "Scanned {}: {} file(s) in {} director(ies)",
            self.root.display(),
            tree.file_count(),
            tree.dir_count()
        );
        Ok(tree)
    }
}

/// Decides whether the walker may yield (and for directories, enter) an entry
fn admit(root: &Path, rules: &RuleSet, entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    if entry.path_is_symlink() {
        log::trace!("Skipping symlink {}", entry.path().display());
        return false;
    }

    let path = relative_path(root, entry.path());
    if rules.is_included(path.as_str()) {
        return true;
    }

    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
        log::debug!("Pruning excluded directory {}", path);
    } else {
        log::trace!("Excluding {}", path);
    }
    false
}

fn relative_path(root: &Path, path: &Path) -> RelPath {
    RelPath::from_path(path.strip_prefix(root).unwrap_or(path))
}
