use crate::common::command::{commit_file, head_commit, init_repository_dir, run_bough_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_already_ancestor(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "old"]).assert().success();
    commit_file(dir, "new.txt", "new", "Ahead of old");
    let head = head_commit(dir);

    run_bough_command(dir, &["merge", "old"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit(dir), head);
}
