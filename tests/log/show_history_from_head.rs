use crate::common::command::{
    checkout, commit_file, find_commit, init_repository_dir, run_bough_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_history_from_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "a.txt", "a", "Second commit");
    commit_file(dir, "b.txt", "b", "Third commit");

    let output = run_bough_command(dir, &["log"]).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let messages = stdout
        .split("===\n")
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.lines().nth(2).unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        vec!["Third commit", "Second commit", "Add base", "initial commit"]
    );
    assert!(stdout.starts_with(&format!("===\ncommit {}\nDate: ", find_commit(dir, "Third commit"))));

    Ok(())
}

#[rstest]
fn merge_commits_show_both_parents(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_bough_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "master.txt", "m", "Master work");
    checkout(dir, "topic");
    commit_file(dir, "topic.txt", "t", "Topic work");
    checkout(dir, "master");

    run_bough_command(dir, &["merge", "topic"]).assert().success();

    let master = find_commit(dir, "Master work");
    let topic = find_commit(dir, "Topic work");
    run_bough_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Merge: {} {}\n",
            &master[..7],
            &topic[..7]
        )))
        .stdout(predicate::str::contains("Merged topic into master.\n"))
        // first parents only
        .stdout(predicate::str::contains("Topic work").not());
}
