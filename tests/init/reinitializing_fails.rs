use crate::common::command::{head_oid, init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinitializing_fails_and_keeps_history(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head_before = head_oid(dir);

    run_twig_command(dir, &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "a twig version-control system already exists",
        ));

    assert_eq!(head_oid(dir), head_before);
}
