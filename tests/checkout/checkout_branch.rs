use crate::common::command::{commit_all, init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `topic` adds `topic.txt` and rewrites `1.txt`; `master` keeps the first commit
#[fixture]
fn diverged_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();
    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("topic.txt"), "topic work".to_string()));
    write_file(FileSpec::new(dir.join("1.txt"), "one on topic".to_string()));
    run_twig_command(dir, &["rm", "a/2.txt"]).assert().success();
    commit_all(dir, "Work on topic");

    init_repository_dir
}

#[rstest]
fn switching_branches_rewrites_the_working_copy(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'master'"));

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a/2.txt")), "two");
    diverged_repository_dir
        .child("topic.txt")
        .assert(predicate::path::missing());
    let head = std::fs::read_to_string(dir.join(".twig/HEAD")).unwrap();
    assert_eq!(head.trim(), "ref: refs/heads/master");

    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("topic.txt")), "topic work");
    assert_eq!(read_file(&dir.join("1.txt")), "one on topic");
    diverged_repository_dir
        .child("a/2.txt")
        .assert(predicate::path::missing());
}

#[rstest]
fn switching_branches_clears_the_staging_area(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("scratch.txt"), "scratch".to_string()));
    run_twig_command(dir, &["add", "scratch.txt"]).assert().success();

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::ends_with(
            "=== Untracked Files ===\nscratch.txt\n",
        ));
}

#[rstest]
fn untracked_file_in_the_way_aborts_the_switch(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("topic.txt"), "local notes".to_string()));

    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("there is an untracked file in the way"))
        .stderr(predicate::str::contains("\ttopic.txt"));

    // nothing moved
    assert_eq!(read_file(&dir.join("topic.txt")), "local notes");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    let head = std::fs::read_to_string(dir.join(".twig/HEAD")).unwrap();
    assert_eq!(head.trim(), "ref: refs/heads/master");
}

#[rstest]
fn untracked_file_with_matching_content_is_not_in_the_way(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("topic.txt"), "topic work".to_string()));

    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();
}

#[rstest]
fn checking_out_the_current_branch_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["checkout", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already on branch 'master'"));
}

#[rstest]
#[case("ghost")]
#[case("bad..name")]
fn checking_out_an_unknown_branch_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(init_repository_dir.path(), &["checkout", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "a branch named '{name}' does not exist"
        )));
}
