use crate::common::command::{bough_commit, init_repository_dir, run_bough_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_every_kind_of_change(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for (name, content) in [("edited.txt", "v1"), ("gone.txt", "gone"), ("kept.txt", "kept")] {
        write_file(FileSpec::new(dir.join(name), content.to_string()));
        run_bough_command(dir, &["add", name]).assert().success();
    }
    bough_commit(dir, "Three more files").assert().success();

    // staged, then edited again
    write_file(FileSpec::new(dir.join("staged.txt"), "one".to_string()));
    run_bough_command(dir, &["add", "staged.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("staged.txt"), "two".to_string()));

    run_bough_command(dir, &["rm", "kept.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("edited.txt"), "v2".to_string()));
    std::fs::remove_file(dir.join("gone.txt")).unwrap();
    write_file(FileSpec::new(dir.join("z/stray.txt"), "stray".to_string()));

    run_bough_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\n\n\
             === Staged Files ===\nstaged.txt\n\n\
             === Removed Files ===\nkept.txt\n\n\
             === Modifications Not Staged For Commit ===\n\
             edited.txt (modified)\ngone.txt (deleted)\nstaged.txt (modified)\n\n\
             === Untracked Files ===\nz/stray.txt\n\n",
        );
}
