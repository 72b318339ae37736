use crate::common::command::{bough_commit, find_commit, head_commit, init_repository_dir, run_bough_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let parent = head_commit(dir);
    write_file(FileSpec::new(dir.join("a/b/c.txt"), "nested".to_string()));
    run_bough_command(dir, &["add", "a/b/c.txt"])
        .assert()
        .success();

    bough_commit(dir, "Add nested file")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master [0-9a-f]{7}\] Add nested file\n$").unwrap());

    let commit = head_commit(dir);
    assert_ne!(commit, parent);
    assert_eq!(find_commit(dir, "Add nested file"), commit);
    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));
}

#[rstest]
fn identical_commits_share_an_id(repository_dir_pair: (TempDir, TempDir)) {
    let (first, second) = repository_dir_pair;

    for dir in [first.path(), second.path()] {
        run_bough_command(dir, &["init"]).assert().success();
        write_file(FileSpec::new(dir.join("same.txt"), "same".to_string()));
        run_bough_command(dir, &["add", "same.txt"]).assert().success();
        run_bough_command(dir, &["commit", "Same commit"])
            .env("BOUGH_COMMIT_DATE", "2024-03-01 12:00:00 +0200")
            .assert()
            .success();
    }

    assert_eq!(head_commit(first.path()), head_commit(second.path()));
}

#[rstest::fixture]
fn repository_dir_pair() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}
