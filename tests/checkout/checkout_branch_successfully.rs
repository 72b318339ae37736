use crate::common::command::{
    checkout, commit_file, current_branch, init_repository_dir, run_bough_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "nested/master.txt", "master only", "Master file");
    commit_file(dir, "base.txt", "base on master\n", "Edit base on master");

    // staged but uncommitted work is discarded from the index
    write_file(FileSpec::new(dir.join("pending.txt"), "pending".to_string()));
    run_bough_command(dir, &["add", "pending.txt"]).assert().success();

    checkout(dir, "topic");

    assert_eq!(current_branch(dir), "topic");
    assert_eq!(read_file(&dir.join("base.txt")), "base\n");
    init_repository_dir
        .child("nested")
        .assert(predicate::path::missing());
    init_repository_dir.child("pending.txt").assert("pending");
    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));

    checkout(dir, "master");

    assert_eq!(read_file(&dir.join("base.txt")), "base on master\n");
    assert_eq!(read_file(&dir.join("nested/master.txt")), "master only");
}
