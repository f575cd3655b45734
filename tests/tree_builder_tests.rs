//! Integration tests for the tree builder
//!
//! Each test lays out a scratch directory, runs a scan with a rule set and
//! checks the resulting tree.

mod common;

use common::{TestResult, scratch_tree};
use navtree::{RuleSet, ScanError, TreeBuilder, TreeNode};
use std::fs;
use std::path::Path;

fn scan(root: &Path, patterns: &[&str]) -> TreeNode {
    let rules = assert_ok!(RuleSet::from_patterns(patterns));
    assert_ok!(TreeBuilder::new(root, rules).build())
}

#[test]
fn test_directory_rule_end_to_end() -> TestResult {
    let dir = scratch_tree(&["a/x.txt", "a/build/y.txt", "README.md"])?;
    let tree = scan(dir.path(), &["build/"]);

    assert_eq!(tree.name(), "");
    assert_eq!(tree.sorted_files(), vec!["README.md"]);

    let a = assert_some!(tree.child("a"));
    assert_eq!(a.sorted_files(), vec!["x.txt"]);
    assert!(a.child("build").is_none());
    assert_eq!(tree.children().len(), 1);
    Ok(())
}

#[test]
fn test_negation_end_to_end() -> TestResult {
    let dir = scratch_tree(&["debug.log", "important.log", "notes.txt"])?;
    let tree = scan(dir.path(), &["*.log", "!important.log"]);

    assert_eq!(tree.sorted_files(), vec!["important.log", "notes.txt"]);
    Ok(())
}

#[test]
fn test_excluded_directory_is_never_entered() -> TestResult {
    let dir = scratch_tree(&["build/keep.txt", "build/other.txt", "src/lib.rs"])?;
    let tree = scan(dir.path(), &["build/", "!build/keep.txt"]);

    assert!(tree.child("build").is_none());
    assert_eq!(tree.file_paths(), vec!["src/lib.rs"]);
    Ok(())
}

#[test]
fn test_nested_excluded_directory_prunes_descendants() -> TestResult {
    let dir = scratch_tree(&[
        "pkg/node_modules/dep/index.js",
        "pkg/node_modules/dep/keep.md",
        "pkg/index.js",
    ])?;
    let tree = scan(dir.path(), &["node_modules/", "!**/keep.md"]);

    assert_eq!(tree.file_paths(), vec!["pkg/index.js"]);
    Ok(())
}

#[test]
fn test_negated_file_inside_glob_excluded_contents() -> TestResult {
    // Excluding the contents (not the directory) keeps the directory walkable
    let dir = scratch_tree(&["build/keep.txt", "build/other.txt"])?;
    let tree = scan(dir.path(), &["build/**", "!build/keep.txt"]);

    assert_eq!(tree.file_paths(), vec!["build/keep.txt"]);
    Ok(())
}

#[test]
fn test_directory_with_only_excluded_files_is_absent() -> TestResult {
    let dir = scratch_tree(&["logs/a.log", "logs/b.log", "main.rs"])?;
    let tree = scan(dir.path(), &["**/*.log"]);

    assert!(tree.child("logs").is_none());
    assert_eq!(tree.file_paths(), vec!["main.rs"]);
    Ok(())
}

#[test]
fn test_empty_directories_are_not_materialized() -> TestResult {
    let dir = scratch_tree(&["a/b/c/file.txt"])?;
    fs::create_dir_all(dir.path().join("a/empty/deeper"))?;
    let tree = scan(dir.path(), &[]);

    let a = assert_some!(tree.child("a"));
    assert!(a.child("empty").is_none());
    assert_eq!(tree.dir_count(), 3);
    Ok(())
}

#[test]
fn test_deep_nesting_builds_full_chain() -> TestResult {
    let dir = scratch_tree(&["one/two/three/four/leaf.txt"])?;
    let tree = scan(dir.path(), &[]);

    let four = assert_some!(tree.find("one/two/three/four"));
    assert_eq!(four.name(), "four");
    assert_eq!(four.sorted_files(), vec!["leaf.txt"]);
    Ok(())
}

#[test]
fn test_rules_see_root_relative_paths() -> TestResult {
    let dir = scratch_tree(&["docs/guide.md", "src/docs/api.md"])?;
    let tree = scan(dir.path(), &["docs/**"]);

    // Anchored at the root: src/docs is untouched
    assert_eq!(tree.file_paths(), vec!["src/docs/api.md"]);
    Ok(())
}

#[test]
fn test_star_does_not_cross_directories() -> TestResult {
    let dir = scratch_tree(&["top.tmp", "nested/inner.tmp"])?;
    let tree = scan(dir.path(), &["*.tmp"]);

    assert_eq!(tree.file_paths(), vec!["nested/inner.tmp"]);
    Ok(())
}

#[test]
fn test_missing_root_is_an_error() {
    let rules = RuleSet::default();
    let result = TreeBuilder::new("/definitely/not/here/navtree", rules).build();
    assert!(matches!(result, Err(ScanError::RootNotDirectory(_))));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_ignored() -> TestResult {
    use std::os::unix::fs::symlink;

    let dir = scratch_tree(&["real/file.txt", "plain.txt"])?;
    symlink(dir.path().join("real"), dir.path().join("linked_dir"))?;
    symlink(dir.path().join("plain.txt"), dir.path().join("linked_file.txt"))?;

    let tree = scan(dir.path(), &[]);
    assert_eq!(tree.file_paths(), vec!["plain.txt", "real/file.txt"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_fails_the_scan() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_tree(&["locked/secret.txt", "open.txt"])?;
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users can read it anyway; nothing to assert then
    let readable = fs::read_dir(&locked).is_ok();
    let result = TreeBuilder::new(dir.path(), RuleSet::default()).build();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    if !readable {
        let err = result.expect_err("scan should fail on unreadable directory");
        assert!(err.to_string().contains("locked"), "{}", err);
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_but_excluded_directory_is_fine() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_tree(&["locked/secret.txt", "open.txt"])?;
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    let rules = assert_ok!(RuleSet::from_patterns(["locked/"]));
    let result = TreeBuilder::new(dir.path(), rules).build();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    let tree = assert_ok!(result);
    assert_eq!(tree.file_paths(), vec!["open.txt"]);
    Ok(())
}
