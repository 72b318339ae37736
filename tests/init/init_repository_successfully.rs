use crate::common::command::{current_branch, head_commit, repository_dir, run_bough_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_bough_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty Bough repository in"));

    repository_dir.child(".bough/objects").assert(predicate::path::is_dir());
    repository_dir.child(".bough/index").assert(predicate::path::is_file());
    repository_dir
        .child(".bough/HEAD")
        .assert("ref: refs/heads/master");
    assert_eq!(current_branch(repository_dir.path()), "master");

    let root = head_commit(repository_dir.path());
    assert_eq!(root.len(), 40);

    run_bough_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(format!(
            "===\ncommit {root}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n"
        ));

    Ok(())
}

#[rstest]
fn every_repository_shares_the_root_commit() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    run_bough_command(first.path(), &["init"]).assert().success();
    run_bough_command(second.path(), &["init"]).assert().success();

    assert_eq!(head_commit(first.path()), head_commit(second.path()));
}
