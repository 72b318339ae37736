use crate::common::command::{
    checkout, commit_file, head_commit, init_repository_dir, run_bough_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_with_uncommitted_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("pending.txt"), "pending".to_string()));
    run_bough_command(dir, &["add", "pending.txt"]).assert().success();

    run_bough_command(dir, &["merge", "topic"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("You have uncommitted changes."));
}

#[rstest]
#[case("missing", "A branch with that name does not exist.")]
#[case("master", "Cannot merge a branch with itself.")]
fn merge_with_bad_target_fails(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_bough_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}

#[rstest]
fn merge_blocked_by_untracked_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "master.txt", "m", "Master work");
    checkout(dir, "topic");
    commit_file(dir, "incoming.txt", "from topic", "Topic work");
    checkout(dir, "master");
    let head = head_commit(dir);
    write_file(FileSpec::new(dir.join("incoming.txt"), "mine".to_string()));

    run_bough_command(dir, &["merge", "topic"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    assert_eq!(head_commit(dir), head);
    assert_eq!(read_file(&dir.join("incoming.txt")), "mine");
}
