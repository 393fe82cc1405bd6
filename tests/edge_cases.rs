//! Edge case and exit-code tests for hollow


use assert_cmd::Command;
use harness::{TestTree, run_hollow};
use predicates::prelude::*;

fn hollow() -> Command {
    Command::cargo_bin("hollow").expect("binary should build")
}

// ============================================================================
// Configuration Errors (fatal, exit 1, nothing touched)
// ============================================================================

#[test]
fn test_missing_target_exits_one() {
    let tree = TestTree::new();
    let missing = tree.path().join("does_not_exist");

    hollow()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("does_not_exist"));
}

#[test]
fn test_target_is_a_file_exits_one() {
    let tree = TestTree::new();
    let file = tree.add_file("plain.txt", "content");

    hollow()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_min_depth_greater_than_max_depth_exits_one() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");
    let inner = tree.add_dir("root/inner");

    hollow()
        .arg(&root)
        .args(["--min-depth", "3", "--max-depth", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--min-depth"));

    // Rejected before any traversal
    assert!(inner.exists());
}

#[test]
fn test_malformed_depth_exits_one() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");

    hollow()
        .arg(&root)
        .args(["--min-depth", "abc"])
        .assert()
        .failure()
        .code(1);

    hollow()
        .arg(&root)
        .args(["--max-depth", "-3"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_unknown_flag_exits_one() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");

    hollow().arg(&root).arg("--frobnicate").assert().failure().code(1);
}

#[test]
fn test_multiple_positional_args_exit_one() {
    let tree = TestTree::new();
    let a = tree.add_dir("a");
    let b = tree.add_dir("b");

    hollow().arg(&a).arg(&b).assert().failure().code(1);
}

#[test]
fn test_no_arguments_exit_one() {
    hollow().assert().failure().code(1);
}

#[test]
fn test_help_exits_zero() {
    hollow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty directories"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--min-depth"));
}

#[test]
fn test_version_exits_zero() {
    hollow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hollow"));
}

// ============================================================================
// Traversal Errors (non-fatal, localized, exit 0)
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory_does_not_abort_scan() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    let root = tree.add_dir("root");
    let locked = tree.add_dir("root/locked");
    let open = tree.add_dir("root/open");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).unwrap();

    let (_stdout, stderr, success) = run_hollow(&root, &[]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).unwrap();

    assert!(success, "traversal errors never change the exit code");
    assert!(
        stderr.contains("locked"),
        "inaccessible subtree should be reported: {}",
        stderr
    );
    assert!(!open.exists(), "sibling subtree still swept");
    assert!(root.exists(), "failed subtree keeps root non-empty");
}

#[test]
#[cfg(unix)]
fn test_symlinked_directory_never_followed() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    let root = tree.add_dir("root");
    let target = tree.add_dir("elsewhere");
    symlink(&target, root.join("link")).unwrap();

    let (_stdout, _stderr, success) = run_hollow(&root, &[]);
    assert!(success);
    assert!(target.exists(), "target must not be deleted through a link");
    assert!(root.exists(), "link counts as content");
}

// ============================================================================
// Special Names
// ============================================================================

#[test]
fn test_names_with_spaces_and_unicode() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");
    let spaced = tree.add_dir("root/dir with spaces");
    let unicode = tree.add_dir("root/空のフォルダ");

    let (stdout, _stderr, success) = run_hollow(&root, &[]);
    assert!(success);
    assert!(!spaced.exists());
    assert!(!unicode.exists());
    assert!(stdout.contains("dir with spaces"), "output: {}", stdout);
    assert!(stdout.contains("空のフォルダ"), "output: {}", stdout);
}

#[test]
fn test_deeply_nested_empty_chain() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");
    tree.add_dir("root/a/b/c/d/e/f/g/h");

    let (stdout, _stderr, success) = run_hollow(&root, &[]);
    assert!(success);
    assert!(!root.exists(), "whole chain collapses bottom-up");
    assert_eq!(stdout.lines().count(), 9, "one line per level: {}", stdout);
}

#[test]
fn test_already_empty_target_is_deleted() {
    let tree = TestTree::new();
    let root = tree.add_dir("root");

    let (stdout, _stderr, success) = run_hollow(&root, &[]);
    assert!(success);
    assert!(!root.exists(), "root itself is depth 0 and in range");
    assert!(stdout.contains(&root.display().to_string()));
}
