use crate::common::command::{
    branch_oid, head_oid, init_repository_dir, run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn new_branch_points_at_head_and_leaves_head_alone(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();

    assert_eq!(branch_oid(dir, "topic"), branch_oid(dir, "master"));
    let head = std::fs::read_to_string(dir.join(".twig/HEAD")).unwrap();
    assert_eq!(head.trim(), "ref: refs/heads/master");
}

#[rstest]
fn branch_can_start_at_an_ancestor(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    write_file(FileSpec::new(dir.join("1.txt"), random_content()));
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "Second commit").assert().success();

    run_twig_command(dir, &["branch", "create", "parent", "master^"])
        .assert()
        .success();
    run_twig_command(dir, &["branch", "create", "prefixed", &first[..8]])
        .assert()
        .success();

    assert_eq!(branch_oid(dir, "parent"), first);
    assert_eq!(branch_oid(dir, "prefixed"), first);
}

#[rstest]
fn duplicate_branch_names_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();

    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a branch named 'topic' already exists"));
}

#[rstest]
#[case("bad..name")]
#[case(".hidden")]
#[case("ends.lock")]
#[case("with space")]
fn invalid_branch_names_are_rejected(init_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(init_repository_dir.path(), &["branch", "create", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid branch name"));
}

#[rstest]
fn unknown_start_revision_is_rejected(init_repository_dir: TempDir) {
    run_twig_command(
        init_repository_dir.path(),
        &["branch", "create", "topic", "nowhere"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("no commit with id nowhere exists"));
}
