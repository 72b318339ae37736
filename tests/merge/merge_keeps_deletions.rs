use crate::common::command::{
    bough_commit, checkout, commit_file, head_commit, init_repository_dir, run_bough_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

/// History:
///
/// ```text
///        A (tracks g.txt)
///       / \
///      B   C
///      |   |
///  master  other
/// ```
///
/// `master` deleted `g.txt` in B while `other` never touched it, so merging
/// `other` into `master` must not bring it back.
#[rstest]
fn merge_keeps_deletions(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "g.txt", "g\n", "Commit A - track g");
    run_bough_command(dir, &["branch", "other"])
        .assert()
        .success();

    run_bough_command(dir, &["rm", "g.txt"]).assert().success();
    bough_commit(dir, "Commit B - delete g").assert().success();

    checkout(dir, "other");
    init_repository_dir.child("g.txt").assert("g\n");
    commit_file(dir, "unrelated.txt", "unrelated\n", "Commit C - other");
    checkout(dir, "master");

    run_bough_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("");

    init_repository_dir
        .child("g.txt")
        .assert(predicate::path::missing());
    init_repository_dir.child("unrelated.txt").assert("unrelated\n");

    let merge_commit = head_commit(dir);
    run_bough_command(dir, &["checkout", &merge_commit, "--", "g.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));
    run_bough_command(dir, &["checkout", &merge_commit, "--", "unrelated.txt"])
        .assert()
        .success();
    run_bough_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged other into master.\n"));
}
