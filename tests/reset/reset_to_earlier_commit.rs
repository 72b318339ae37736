use crate::common::command::{
    commit_file, current_branch, find_commit, head_commit, init_repository_dir, run_bough_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn reset_to_earlier_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let base = find_commit(dir, "Add base");
    commit_file(dir, "base.txt", "changed\n", "Change base");
    commit_file(dir, "later.txt", "later", "Add later");
    write_file(FileSpec::new(dir.join("untracked.txt"), "mine".to_string()));

    run_bough_command(dir, &["reset", &base[..10]])
        .assert()
        .success();

    assert_eq!(head_commit(dir), base);
    assert_eq!(current_branch(dir), "master");
    assert_eq!(read_file(&dir.join("base.txt")), "base\n");
    init_repository_dir
        .child("later.txt")
        .assert(predicate::path::missing());
    init_repository_dir.child("untracked.txt").assert("mine");
    run_bough_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add later").not());
}

#[rstest]
fn reset_to_unknown_commit_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_commit(dir);

    run_bough_command(dir, &["reset", "ffffffffff"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No commit with that id exists."));
    assert_eq!(head_commit(dir), head);
}
