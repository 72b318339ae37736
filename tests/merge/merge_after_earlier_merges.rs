use crate::common::command::{checkout, commit_file, init_repository_dir, run_bough_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

/// Master merges topic, topic fast-forwards to that merge, then both move on:
///
/// ```text
///   base --- m1 --- M1 --- m2   (master)
///      \          /   \
///       t1 ------+     t2       (topic)
/// ```
///
/// The second merge splits at M1, so only t2's change is brought over.
#[rstest]
fn merge_after_earlier_merges(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "master.txt", "m1", "m1");

    checkout(dir, "topic");
    commit_file(dir, "topic.txt", "t1", "t1");

    checkout(dir, "master");
    run_bough_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("");

    checkout(dir, "topic");
    run_bough_command(dir, &["merge", "master"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");
    commit_file(dir, "topic.txt", "t2", "t2");

    checkout(dir, "master");
    commit_file(dir, "master.txt", "m2", "m2");

    run_bough_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("master.txt")), "m2");
    assert_eq!(read_file(&dir.join("topic.txt")), "t2");
    assert_eq!(read_file(&dir.join("base.txt")), "base\n");
}
