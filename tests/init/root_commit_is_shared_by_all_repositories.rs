use crate::common::command::{branch_oid, run_twig_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn root_commit_is_shared_by_all_repositories() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    run_twig_command(first.path(), &["init"]).assert().success();
    run_twig_command(second.path(), &["init"]).assert().success();

    assert_eq!(
        branch_oid(first.path(), "master"),
        branch_oid(second.path(), "master")
    );
}
