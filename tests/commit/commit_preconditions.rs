use crate::common::command::{branch_oid, init_repository_dir, run_twig_command, twig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn committing_with_nothing_staged_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let before = branch_oid(dir, "master");

    // working changes alone are not enough
    write_file(FileSpec::new(dir.join("1.txt"), "unstaged".to_string()));

    twig_commit(dir, "Nothing here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changes added to the commit"));
    assert_eq!(before, branch_oid(dir, "master"));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn committing_without_a_message_fails(init_repository_dir: TempDir, #[case] message: &str) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "staged".to_string()));
    run_twig_command(dir, &["add", "1.txt"]).assert().success();

    twig_commit(dir, message)
        .assert()
        .failure()
        .stderr(predicate::str::contains("please enter a commit message"));

    // the staged change survives the failed commit
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n1.txt\n"));
}
