use crate::common::command::{init_repository_dir, run_bough_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_empty_sections_for_clean_repository(init_repository_dir: TempDir) {
    run_bough_command(init_repository_dir.path(), &["branch", "topic"])
        .assert()
        .success();

    run_bough_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\ntopic\n\n\
             === Staged Files ===\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n\n",
        );
}
