use crate::common::command::{
    checkout, commit_file, find_commit, head_commit, init_repository_dir, run_bough_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

/// Split S has `f = "base"`, A sets `f = "A-version"`, B sets
/// `f = "B-version"`; merging A into B writes both versions.
#[rstest]
fn merge_conflict(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "f", "base", "Commit S");
    run_bough_command(dir, &["branch", "A"]).assert().success();
    run_bough_command(dir, &["branch", "B"]).assert().success();
    checkout(dir, "A");
    commit_file(dir, "f", "A-version", "A changes f");
    checkout(dir, "B");
    commit_file(dir, "f", "B-version", "B changes f");
    let b_tip = head_commit(dir);
    let a_tip = find_commit(dir, "A changes f");

    run_bough_command(dir, &["merge", "A"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("f")),
        "<<<<<<< HEAD\nB-version=======\nA-version>>>>>>>\n"
    );
    let merge = head_commit(dir);
    assert_eq!(find_commit(dir, "Merged A into B."), merge);
    run_bough_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "commit {merge}\nMerge: {} {}\n",
            &b_tip[..7],
            &a_tip[..7]
        )));
    // the conflicted content was committed, so nothing is pending
    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n",
        ));
}

#[rstest]
fn merge_conflict_between_edit_and_deletion(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "base.txt", "edited\n", "Edit base");
    checkout(dir, "topic");
    run_bough_command(dir, &["rm", "base.txt"]).assert().success();
    run_bough_command(dir, &["commit", "Delete base"])
        .assert()
        .success();
    checkout(dir, "master");

    run_bough_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("base.txt")),
        "<<<<<<< HEAD\nedited\n=======\n>>>>>>>\n"
    );
}
