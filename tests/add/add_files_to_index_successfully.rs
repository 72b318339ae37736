use crate::common::command::{init_repository_dir, run_bough_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_files_to_index_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 3);
    write_file(FileSpec::new(
        dir.join("nested/dir/deep.txt"),
        "deep".to_string(),
    ));

    for file in ["0.txt", "1.txt", "2.txt", "nested/dir/deep.txt"] {
        run_bough_command(dir, &["add", file]).assert().success();
    }

    assert_eq!(files.len(), 3);
    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n0.txt\n1.txt\n2.txt\nnested/dir/deep.txt\n\n",
        ));
}

#[rstest]
fn adding_committed_content_again_stages_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bough_command(dir, &["add", "base.txt"])
        .assert()
        .success();

    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
    run_bough_command(dir, &["commit", "nothing new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}
