//! Directory traversal and filtered tree construction

pub mod tree_builder;

pub use tree_builder::{TreeBuilder, TreeNode};
