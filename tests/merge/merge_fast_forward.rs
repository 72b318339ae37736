use crate::common::command::{
    checkout, commit_file, current_branch, find_commit, head_commit, init_repository_dir,
    run_bough_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

/// History:
///
/// ```text
///   X ---- Y
///   |      |
///   B    master
/// ```
///
/// Merging master into B moves B to Y without a new commit.
#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "b"]).assert().success();
    commit_file(dir, "base.txt", "y\n", "Commit Y");
    commit_file(dir, "y.txt", "new in y", "Commit Y2");
    let y = find_commit(dir, "Commit Y2");
    checkout(dir, "b");

    run_bough_command(dir, &["merge", "master"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(current_branch(dir), "b");
    assert_eq!(head_commit(dir), y);
    assert_eq!(read_file(&dir.join("base.txt")), "y\n");
    assert_eq!(read_file(&dir.join("y.txt")), "new in y");
    run_bough_command(dir, &["find", "Merged master into b."])
        .assert()
        .failure();
}
