use crate::common::command::{branch_oid, init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn deleting_a_branch_reports_its_last_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();
    let short = branch_oid(dir, "topic")[..7].to_string();

    run_twig_command(dir, &["branch", "delete", "topic"])
        .assert()
        .success()
        .stdout(format!("Deleted branch topic (was {short}).\n"));

    init_repository_dir
        .child(".twig/refs/heads/topic")
        .assert(predicate::path::missing());
    // the commit itself stays reachable by id
    run_twig_command(dir, &["cat-file", "-p", &short])
        .assert()
        .success();
}

#[rstest]
fn deleting_the_current_branch_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["branch", "delete", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete the current branch 'master'"));
}

#[rstest]
fn deleting_a_missing_branch_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["branch", "delete", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'ghost' does not exist"));
}
