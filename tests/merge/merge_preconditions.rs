use crate::common::command::{init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merging_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "staged".to_string()));
    run_twig_command(dir, &["add", "1.txt"]).assert().success();

    run_twig_command(dir, &["merge", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("you have uncommitted changes"));
}

#[rstest]
fn merging_a_missing_branch_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["merge", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a branch named 'ghost' does not exist"));
}

#[rstest]
fn merging_the_current_branch_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot merge a branch with itself"));
}
