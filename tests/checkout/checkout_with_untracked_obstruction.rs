use crate::common::command::{
    checkout, commit_file, current_branch, head_commit, init_repository_dir, run_bough_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_with_untracked_obstruction(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    checkout(dir, "topic");
    commit_file(dir, "shared.txt", "from topic", "Topic adds shared");
    checkout(dir, "master");
    let head = head_commit(dir);

    write_file(FileSpec::new(dir.join("shared.txt"), "precious".to_string()));

    run_bough_command(dir, &["checkout", "topic"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    assert_eq!(read_file(&dir.join("shared.txt")), "precious");
    assert_eq!(current_branch(dir), "master");
    assert_eq!(head_commit(dir), head);
}

#[rstest]
fn untracked_file_with_matching_content_is_not_an_obstruction(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    checkout(dir, "topic");
    commit_file(dir, "shared.txt", "same", "Topic adds shared");
    checkout(dir, "master");

    write_file(FileSpec::new(dir.join("shared.txt"), "same".to_string()));

    run_bough_command(dir, &["checkout", "topic"])
        .assert()
        .success();
    assert_eq!(current_branch(dir), "topic");
}
