use crate::common::command::{bough_commit, init_repository_dir, run_bough_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_without_staged_changes_fails(init_repository_dir: TempDir) {
    bough_commit(init_repository_dir.path(), "Nothing here")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn commit_with_blank_message_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    run_bough_command(dir, &["add", "a.txt"]).assert().success();

    bough_commit(dir, "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please enter a commit message."));
}
